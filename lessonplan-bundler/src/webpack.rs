//! `webpack.config.js` emission.

use tera::Tera;
use tracing::debug;

use crate::config::BundlerConfig;
use crate::error::BundlerError;

const TEMPLATE_NAME: &str = "webpack.config.js";
const TEMPLATE: &str = include_str!("templates/webpack.config.js.tera");

/// Render `config` as a CommonJS webpack configuration module.
///
/// The config is validated first. String values are emitted as JSON string
/// literals, so paths and loader names cannot break out of the generated
/// JavaScript.
pub fn render_webpack_config(config: &BundlerConfig) -> Result<String, BundlerError> {
    config.validate()?;

    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
    let ctx = tera::Context::from_serialize(config)?;
    let rendered = tera.render(TEMPLATE_NAME, &ctx)?;
    debug!(rules = config.rules.len(), bytes = rendered.len(), "rendered webpack config");
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_renders_expected_fields() {
        let js = render_webpack_config(&BundlerConfig::default()).unwrap();
        assert!(js.contains(r#"mode: "development","#));
        assert!(js.contains(r#"entry: "./static/js/index.js","#));
        assert!(js.contains(r#"path: path.resolve(__dirname, "static/dist"),"#));
        assert!(js.contains(r#"filename: "bundle.js","#));
        assert!(js.contains(r#"directory: path.resolve(__dirname, "static"),"#));
        assert!(js.contains("hot: true,"));
        assert!(js.contains("port: 8080,"));
    }

    #[test]
    fn css_rule_uses_style_then_css_loader() {
        let js = render_webpack_config(&BundlerConfig::default()).unwrap();
        assert!(js.contains(r#"test: new RegExp("\\.css$"),"#));
        assert!(js.contains(r#"use: ["style-loader", "css-loader"],"#));
    }

    #[test]
    fn invalid_config_is_not_rendered() {
        let mut config = BundlerConfig::default();
        config.entry.clear();
        assert!(matches!(
            render_webpack_config(&config),
            Err(BundlerError::Invalid(_))
        ));
    }
}
