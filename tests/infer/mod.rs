mod tests_caching;
mod tests_engine;
