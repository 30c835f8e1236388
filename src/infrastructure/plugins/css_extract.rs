use crate::core::models::PluginSpec;
use crate::core::plugin::Plugin;

/// Declares the standalone stylesheet bundle the downstream bundler
/// extracts compiled styles into. The extraction itself is external; kumu
/// only fixes the output name, hash-qualified in production.
pub struct CssExtractPlugin {
    filename: String,
}

impl CssExtractPlugin {
    pub fn new(filename: String) -> Self {
        Self { filename }
    }
}

impl Plugin for CssExtractPlugin {
    fn name(&self) -> &str {
        "css-extract"
    }

    fn spec(&self) -> PluginSpec {
        PluginSpec::CssExtract {
            filename: self.filename.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::BuildMode;

    #[test]
    fn test_spec_carries_mode_dependent_filename() {
        let dev = CssExtractPlugin::new(BuildMode::Development.style_bundle_filename());
        assert_eq!(
            dev.spec(),
            PluginSpec::CssExtract {
                filename: "assets/stylesheet/bundle.css".to_string()
            }
        );

        let prod = CssExtractPlugin::new(BuildMode::Production.style_bundle_filename());
        assert_eq!(
            prod.spec(),
            PluginSpec::CssExtract {
                filename: "assets/stylesheet/bundle.[contenthash].css".to_string()
            }
        );
    }
}
