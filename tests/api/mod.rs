mod catalog_tests;
mod session_tests;
mod wanted_tests;
