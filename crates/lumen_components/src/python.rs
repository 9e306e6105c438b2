//! Python bindings, enabled with the `python` feature.

use crate::{Button, ButtonVariant, ImageLoader, Img, ImgProps, Label, LabelVariant, Settlement, Size};
use lumen_core::LumenError;
use pyo3::prelude::*;
use serde::de::DeserializeOwned;

/// Parse a lowercase enum name such as `"danger"` or `"small"`.
fn parse_enum<T: DeserializeOwned>(name: &str) -> PyResult<T> {
    serde_json::from_value(serde_json::Value::String(name.to_string()))
        .map_err(|e| LumenError::from(e).into())
}

#[pyclass(name = "RustImageLoader")]
#[derive(Clone, Debug)]
pub struct PyImageLoader {
    inner: ImageLoader,
}

#[pymethods]
impl PyImageLoader {
    #[new]
    #[pyo3(signature = (primary, fallback=None))]
    fn new(primary: String, fallback: Option<String>) -> PyResult<Self> {
        Ok(Self {
            inner: ImageLoader::from_sources(primary, fallback)?,
        })
    }

    /// Returns `(state, source)` after applying the settlement.
    fn on_source_settled(&mut self, source: &str, success: bool) -> (String, String) {
        let outcome = if success {
            Settlement::Success
        } else {
            Settlement::Failure
        };
        let view = self.inner.on_source_settled(source, outcome);
        (view.state.to_string(), view.source.to_string())
    }

    fn current_view(&self) -> (String, String) {
        let view = self.inner.current_view();
        (view.state.to_string(), view.source.to_string())
    }

    #[pyo3(signature = (primary, fallback=None))]
    fn reset(&mut self, primary: String, fallback: Option<String>) -> PyResult<()> {
        Ok(self.inner.reset(primary, fallback)?)
    }
}

#[pyclass(name = "RustImg")]
#[derive(Clone, Debug)]
pub struct PyImg {
    inner: Img,
}

#[pymethods]
impl PyImg {
    #[new]
    #[pyo3(signature = (src, alt, fallback_src=None, disabled=false, clickable=false))]
    fn new(
        src: String,
        alt: String,
        fallback_src: Option<String>,
        disabled: bool,
        clickable: bool,
    ) -> PyResult<Self> {
        let props = ImgProps {
            fallback_src,
            disabled,
            clickable,
            ..ImgProps::new(src, alt)
        };
        Ok(Self {
            inner: Img::new(props)?,
        })
    }

    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        Ok(Self {
            inner: Img::from_json(json)?,
        })
    }

    fn on_load(&mut self, source: &str) -> String {
        self.inner.on_load(source).state.to_string()
    }

    fn on_error(&mut self, source: &str) -> String {
        self.inner.on_error(source).state.to_string()
    }

    fn click(&self) -> bool {
        self.inner.click()
    }

    pub fn render(&self) -> String {
        self.inner.render()
    }

    pub fn __str__(&self) -> String {
        self.render()
    }
}

#[pyclass(name = "RustButton")]
#[derive(Clone, Debug)]
pub struct PyButton {
    inner: Button,
}

#[pymethods]
impl PyButton {
    #[new]
    #[pyo3(signature = (text, variant="primary", size="medium", disabled=false))]
    fn new(text: String, variant: &str, size: &str, disabled: bool) -> PyResult<Self> {
        let variant: ButtonVariant = parse_enum(variant)?;
        let size: Size = parse_enum(size)?;
        Ok(Self {
            inner: Button::new(text, variant, size, disabled),
        })
    }

    pub fn render(&self) -> String {
        self.inner.render()
    }

    pub fn __str__(&self) -> String {
        self.render()
    }

    pub fn __repr__(&self) -> String {
        format!("RustButton({:?})", self.inner)
    }
}

#[pyclass(name = "RustLabel")]
#[derive(Clone, Debug)]
pub struct PyLabel {
    inner: Label,
}

#[pymethods]
impl PyLabel {
    #[new]
    #[pyo3(signature = (text, html_for=None, size="medium", variant="default", disabled=false))]
    fn new(
        text: String,
        html_for: Option<String>,
        size: &str,
        variant: &str,
        disabled: bool,
    ) -> PyResult<Self> {
        let size: Size = parse_enum(size)?;
        let variant: LabelVariant = parse_enum(variant)?;
        let mut label = Label::new(text).size(size).variant(variant).disabled(disabled);
        if let Some(id) = html_for {
            label = label.html_for(id);
        }
        Ok(Self { inner: label })
    }

    pub fn render(&self) -> String {
        self.inner.render()
    }

    pub fn __str__(&self) -> String {
        self.render()
    }
}

/// Re-export components for PyO3 module
pub fn register_components(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyImageLoader>()?;
    m.add_class::<PyImg>()?;
    m.add_class::<PyButton>()?;
    m.add_class::<PyLabel>()?;
    Ok(())
}
