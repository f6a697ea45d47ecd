//! HTML page templates
//!
//! Pages live as standalone files under `templates/` and are compiled into
//! the binary with `include_str!`. Every page extends `base.html`. Names
//! end in `.html`, so minijinja escapes interpolated values.

use minijinja::Environment;
use serde::Serialize;

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");
pub const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
pub const LIST_TEMPLATE: &str = include_str!("../templates/listar.html");
pub const EDIT_TEMPLATE: &str = include_str!("../templates/editar.html");

/// Page names accepted by [`Templates::render`].
pub mod page {
    pub const INDEX: &str = "index.html";
    pub const LIST: &str = "listar.html";
    pub const EDIT: &str = "editar.html";
}

/// Compiled template set, built once at startup and shared by handlers.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", BASE_TEMPLATE)?;
        env.add_template(page::INDEX, INDEX_TEMPLATE)?;
        env.add_template(page::LIST, LIST_TEMPLATE)?;
        env.add_template(page::EDIT, EDIT_TEMPLATE)?;

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
