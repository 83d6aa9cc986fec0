use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::merge::merge_all;
use crate::theme::Theme;
use crate::themed::{BlockNames, PropThemeMap, ThemedComponent};

/// One themed component definition.
///
/// ```toml
/// [components.card]
/// element = "div"
/// names = ["card", "raised"]
/// props = { active = "activeCard" }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentConfig {
    /// Element rendered when no block substitutes one (defaults to "div")
    #[serde(default = "default_element")]
    pub element: String,

    /// Block names, either a single string or a list
    pub names: BlockNames,

    /// Property key to block name for conditional blocks
    #[serde(default)]
    pub props: PropThemeMap,
}

/// Component manifest loaded from downstyle.toml
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Theme files merged in order (relative to the manifest's directory)
    #[serde(default)]
    pub themes: Vec<PathBuf>,

    /// Component definitions by name
    #[serde(default)]
    pub components: BTreeMap<String, ComponentConfig>,

    /// Where the manifest was loaded from, used to resolve theme paths
    #[serde(skip)]
    pub path: PathBuf,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut manifest: Manifest = toml::from_str(&content)?;
        manifest.path = path.to_path_buf();

        tracing::info!(
            path = %path.display(),
            themes = manifest.themes.len(),
            components = manifest.components.len(),
            "manifest loaded"
        );

        Ok(manifest)
    }

    /// Directory theme paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Load every listed theme and merge them in order.
    pub fn theme(&self) -> Result<Theme> {
        let themes = self
            .themes
            .iter()
            .map(|path| Theme::load(&self.base_dir().join(path)))
            .collect::<Result<Vec<_>>>()?;

        Ok(merge_all(&themes))
    }

    /// Build the named component against an already merged theme.
    pub fn component(&self, name: &str, theme: &Arc<Theme>) -> Result<ThemedComponent> {
        let config = self
            .components
            .get(name)
            .ok_or_else(|| Error::ComponentNotFound {
                name: name.to_string(),
                manifest: self.path.clone(),
            })?;

        Ok(config.build(theme))
    }
}

impl ComponentConfig {
    pub fn build(&self, theme: &Arc<Theme>) -> ThemedComponent {
        let prop_map = (!self.props.is_empty()).then(|| self.props.clone());
        ThemedComponent::new(
            self.element.as_str(),
            Arc::clone(theme),
            self.names.clone(),
            prop_map,
        )
    }
}

fn default_element() -> String {
    "div".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::Props;
    use crate::theme::ElementType;
    use std::fs;

    #[test]
    fn minimal_manifest() {
        let toml = r#"
            [components.card]
            names = "card"
        "#;
        let manifest: Manifest = toml::from_str(toml).unwrap();

        let card = &manifest.components["card"];
        assert!(manifest.themes.is_empty());
        assert_eq!(card.element, "div");
        assert_eq!(card.names, BlockNames::from("card"));
        assert!(card.props.is_empty());
    }

    #[test]
    fn full_manifest() {
        let toml = r#"
            themes = ["base.toml", "dark.json"]

            [components.card]
            element = "section"
            names = ["card", "raised"]
            props = { active = "activeCard", disabled = "muted" }
        "#;
        let manifest: Manifest = toml::from_str(toml).unwrap();

        let card = &manifest.components["card"];
        assert_eq!(manifest.themes, vec![PathBuf::from("base.toml"), PathBuf::from("dark.json")]);
        assert_eq!(card.element, "section");
        assert_eq!(card.names, BlockNames::from(["card", "raised"]));
        assert_eq!(card.props.get("active"), Some("activeCard"));
        assert_eq!(card.props.get("disabled"), Some("muted"));
    }

    #[test]
    fn missing_names_fails() {
        let toml = r#"
            [components.card]
            element = "div"
        "#;
        let result: std::result::Result<Manifest, _> = toml::from_str(toml);

        assert!(result.is_err());
    }

    #[test]
    fn load_merges_themes_relative_to_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("themes")).unwrap();
        fs::write(
            dir.path().join("themes/base.toml"),
            r#"
                [classNames]
                card = "card"

                [elements]
                card = "section"
            "#,
        )
        .unwrap();
        fs::write(
            dir.path().join("themes/dark.json"),
            r#"{"classNames": {"card": "dark", "activeCard": "active"}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("downstyle.toml"),
            r#"
                themes = ["themes/base.toml", "themes/dark.json"]

                [components.card]
                names = "card"
                props = { active = "activeCard" }
            "#,
        )
        .unwrap();

        let manifest = Manifest::load(&dir.path().join("downstyle.toml")).unwrap();
        let theme = Arc::new(manifest.theme().unwrap());
        let card = manifest.component("card", &theme).unwrap();

        assert_eq!(theme.class_names["card"], "card dark");
        assert_eq!(card.base().element, ElementType::from("section"));

        let rendered = card.render(Props::new().attr("active", true));
        assert_eq!(rendered.class_name, "card dark asd active ");
    }

    #[test]
    fn mapped_props_apply_in_manifest_order() {
        let toml = r#"
            [components.card]
            names = "card"
            props = { zeta = "selected", alpha = "disabled" }
        "#;
        let manifest: Manifest = toml::from_str(toml).unwrap();
        let theme = Arc::new(
            Theme::new()
                .class_name("card", "card")
                .element("selected", "article")
                .element("disabled", "fieldset"),
        );

        let card = manifest.component("card", &theme).unwrap();
        let order = card.prop_map().unwrap().iter().collect::<Vec<_>>();
        let rendered = card.render(Props::new().attr("alpha", true).attr("zeta", true));

        assert_eq!(order, vec![("zeta", "selected"), ("alpha", "disabled")]);
        assert_eq!(rendered.class_name, "card asd selected disabled ");
        assert_eq!(rendered.element, ElementType::from("fieldset"));
        assert!(rendered.attrs.is_empty());
    }

    #[test]
    fn unknown_component_fails() {
        let manifest: Manifest = toml::from_str("").unwrap();
        let theme = Arc::new(Theme::new());

        assert!(matches!(
            manifest.component("nope", &theme),
            Err(Error::ComponentNotFound { name, .. }) if name == "nope"
        ));
    }

    #[test]
    fn missing_theme_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("downstyle.toml");
        fs::write(&path, r#"themes = ["missing.toml"]"#).unwrap();

        let manifest = Manifest::load(&path).unwrap();

        assert!(matches!(manifest.theme(), Err(Error::Io(_))));
    }
}
