//! Image component with loading placeholder and fallback source.
//!
//! The component owns an [`ImageLoader`] and renders whichever of the three
//! load states is current. Load and error events from the client are fed
//! back through [`Img::on_load`] and [`Img::on_error`].

pub mod loader;

use lumen_core::{html_escape, ClassList, Length, Result};
use serde::{Deserialize, Serialize};

pub use loader::{ActiveSource, ImageLoader, ImageView, LoadPhase, LoadState, Settlement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    Contain,
    #[default]
    Cover,
    Fill,
    None,
    ScaleDown,
}

impl ObjectFit {
    pub fn as_css(self) -> &'static str {
        match self {
            ObjectFit::Contain => "contain",
            ObjectFit::Cover => "cover",
            ObjectFit::Fill => "fill",
            ObjectFit::None => "none",
            ObjectFit::ScaleDown => "scale-down",
        }
    }
}

/// Value of the `loading` attribute on the rendered `<img>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingStrategy {
    #[default]
    Lazy,
    Eager,
}

impl LoadingStrategy {
    pub fn as_attr(self) -> &'static str {
        match self {
            LoadingStrategy::Lazy => "lazy",
            LoadingStrategy::Eager => "eager",
        }
    }
}

fn default_border_radius() -> String {
    "0".to_string()
}

/// Props accepted by [`Img`]. Field names are camelCase in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImgProps {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub width: Option<Length>,
    #[serde(default)]
    pub height: Option<Length>,
    #[serde(default)]
    pub object_fit: ObjectFit,
    #[serde(default = "default_border_radius")]
    pub border_radius: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub loading: LoadingStrategy,
    #[serde(default)]
    pub fallback_src: Option<String>,
    /// Whether a click handler is attached on the client.
    #[serde(default)]
    pub clickable: bool,
    #[serde(default)]
    pub class_name: Option<String>,
}

impl ImgProps {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: None,
            height: None,
            object_fit: ObjectFit::default(),
            border_radius: default_border_radius(),
            disabled: false,
            loading: LoadingStrategy::default(),
            fallback_src: None,
            clickable: false,
            class_name: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Img {
    props: ImgProps,
    loader: ImageLoader,
}

impl Img {
    pub fn new(props: ImgProps) -> Result<Self> {
        let loader = ImageLoader::from_sources(props.src.clone(), props.fallback_src.clone())?;
        Ok(Self { props, loader })
    }

    /// Build from a JSON props object, e.g. `{"src": "...", "alt": "...", "fallbackSrc": "..."}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let props: ImgProps = serde_json::from_str(json)?;
        Self::new(props)
    }

    pub fn props(&self) -> &ImgProps {
        &self.props
    }

    pub fn loader(&self) -> &ImageLoader {
        &self.loader
    }

    pub fn view(&self) -> ImageView<'_> {
        self.loader.current_view()
    }

    pub fn on_load(&mut self, source: &str) -> ImageView<'_> {
        self.loader.on_source_settled(source, Settlement::Success)
    }

    pub fn on_error(&mut self, source: &str) -> ImageView<'_> {
        self.loader.on_source_settled(source, Settlement::Failure)
    }

    /// Whether a click on the image should reach the click handler.
    pub fn click(&self) -> bool {
        self.props.clickable && !self.props.disabled
    }

    pub fn cursor(&self) -> &'static str {
        if self.props.disabled {
            "not-allowed"
        } else if self.props.clickable {
            "pointer"
        } else {
            "default"
        }
    }

    fn size_style(&self) -> Vec<String> {
        let mut rules = Vec::new();
        if let Some(width) = &self.props.width {
            rules.push(format!("width: {width}"));
        }
        if let Some(height) = &self.props.height {
            rules.push(format!("height: {height}"));
        }
        rules
    }

    fn image_style(&self) -> String {
        let mut rules = vec![
            "display: block".to_string(),
            "max-width: 100%".to_string(),
            format!("object-fit: {}", self.props.object_fit.as_css()),
            format!("border-radius: {}", self.props.border_radius),
            format!("cursor: {}", self.cursor()),
        ];
        rules.extend(self.size_style());
        if self.props.disabled {
            rules.push("opacity: 0.6".to_string());
            rules.push("filter: grayscale(100%)".to_string());
        }
        rules.join("; ")
    }

    fn container_open(&self, state_class: &str, sized: bool) -> String {
        let mut classes = ClassList::new("img-container");
        classes.push(state_class);
        classes.push_if(self.props.disabled, "disabled");
        if let Some(extra) = &self.props.class_name {
            classes.push(extra.as_str());
        }

        let size = if sized { self.size_style() } else { Vec::new() };
        if size.is_empty() {
            format!(r#"<div class="{classes}">"#)
        } else {
            format!(
                r#"<div class="{}" style="{}">"#,
                classes,
                html_escape(&size.join("; "))
            )
        }
    }

    fn image_tag(&self, source: &str, hidden: bool) -> String {
        if hidden {
            // No `loading` hint: a lazy image that is hidden is never fetched
            format!(
                r#"<img src="{}" alt="{}" hidden>"#,
                html_escape(source),
                html_escape(&self.props.alt)
            )
        } else {
            format!(
                r#"<img src="{}" alt="{}" loading="{}" style="{}">"#,
                html_escape(source),
                html_escape(&self.props.alt),
                self.props.loading.as_attr(),
                html_escape(&self.image_style())
            )
        }
    }

    /// Render the current state to HTML.
    ///
    /// While loading, the active source is emitted as a hidden `<img>` so the
    /// client starts fetching it and can report back.
    pub fn render(&self) -> String {
        let view = self.view();
        match view.state {
            LoadState::Loading => format!(
                "{}Loading...{}</div>",
                self.container_open("loading", true),
                self.image_tag(view.source, true)
            ),
            LoadState::Failed => format!(
                "{}Failed to load image</div>",
                self.container_open("error", true)
            ),
            LoadState::Loaded => format!(
                "{}{}</div>",
                self.container_open("", false),
                self.image_tag(view.source, false)
            ),
        }
    }
}
