//! Shared test content

pub const MANIFEST: &str = r#"{
  "name": "sass-greedy",
  "version": "1.0.0",
  "author": "Jane Doe"
}
"#;

pub const HELPERS_SCSS: &str = "@function greedy-percent($n) { @return $n * 1%; }\n";

pub const MIXINS_SCSS: &str = "@mixin greedy-row { display: flex; }\n";

pub const GRID_SCSS: &str = ".row { @include greedy-row; }\n";

/// Default header rendered with `MANIFEST`
pub const RENDERED_HEADER: &str = "/*!\n\
* sass-greedy v1.0.0\n\
* A flexible, lightweight and simple grid generator for sass.\n\
*\n\
* Author: Jane Doe\n\
*/\n";
