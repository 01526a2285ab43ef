mod tests_analysis;
mod tests_editor;
