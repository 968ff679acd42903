pub mod test_config_util;
