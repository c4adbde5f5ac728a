pub mod input;
#[cfg(test)]
pub mod test_utils;
