mod tests_builtins;
mod tests_features;
