mod tests_scripts;
