mod test_connect_failures;
mod test_connect_guards;
