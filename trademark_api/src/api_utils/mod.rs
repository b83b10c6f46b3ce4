pub mod trademarkia_utils;
