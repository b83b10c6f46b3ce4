pub mod url_param;
