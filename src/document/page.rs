//! Page layout of the Read the Docs theme

use crate::document::Document;
use crate::document::node::{Element, Node};

/// A page with the two regions the banner logic touches
///
/// Either region may be missing when the page template does not provide it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    other_versions: Option<Element>,
    banner: Option<Element>,
}

impl Page {
    /// Stock layout: `<div class="rst-other-versions"><dl>..</dl></div>` and
    /// `<div class="version-banner"></div>`
    pub fn new() -> Self {
        Self::from_parts(
            Some(
                Element::new("div")
                    .with_class("rst-other-versions")
                    .with_child(
                        Element::new("dl")
                            .with_child(Element::new("dt").with_child(Node::text("Versions"))),
                    ),
            ),
            Some(Element::new("div").with_class("version-banner")),
        )
    }

    pub fn from_parts(other_versions: Option<Element>, banner: Option<Element>) -> Self {
        Self {
            other_versions,
            banner,
        }
    }

    pub fn other_versions(&self) -> Option<&Element> {
        self.other_versions.as_ref()
    }

    pub fn banner(&self) -> Option<&Element> {
        self.banner.as_ref()
    }

    /// Links of the version list as `(href, text)` pairs, in list order
    pub fn version_links(&self) -> Vec<(String, String)> {
        let Some(list) = self
            .other_versions
            .as_ref()
            .and_then(|div| div.child_elements().find(|e| e.tag == "dl"))
        else {
            return Vec::new();
        };

        list.child_elements()
            .filter(|e| e.tag == "dd")
            .flat_map(|dd| dd.child_elements())
            .filter(|e| e.tag == "a")
            .map(|a| {
                (
                    a.attribute("href").unwrap_or_default().to_string(),
                    a.text_content(),
                )
            })
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for Page {
    fn version_list(&mut self) -> Option<&mut Element> {
        self.other_versions.as_mut()?.child_mut("dl")
    }

    fn version_banner(&mut self) -> Option<&mut Element> {
        self.banner.as_mut()
    }
}
