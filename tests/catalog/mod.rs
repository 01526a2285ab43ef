mod tests_classify;
mod tests_types;
