//! [`Surface`] implementation over the browser DOM.
//!
//! Expects the element to contain a `div.uc-initial-content` and a
//! `div.uc-final-content` child. Installing wraps them in `uc-initial` /
//! `uc-final` and moves a copy of the initial content plus the final
//! content into a hidden `uc-final-wrapper`; step panels are appended to
//! the element itself.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node as DomNode};

use crate::content::panels::UNFOLD_CLASS;
use crate::content::{Child, Node, Slot, StepPanels, Style};
use crate::error::FoldError;
use crate::geometry::{Dimensions, Placement};
use crate::surface::{Surface, Trigger};

const ACTIVE_CLASS: &str = "uc-current";

fn html(element: Element) -> Result<HtmlElement, JsValue> {
    element.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

fn apply_style(element: &HtmlElement, style: &Style) -> Result<(), JsValue> {
    let decl = element.style();
    for (property, value) in style.iter() {
        decl.set_property(property, value)?;
    }
    Ok(())
}

fn set_display(element: &HtmlElement, display: &str) -> Result<(), JsValue> {
    element.style().set_property("display", display)
}

fn set_opacity(root: &Element, selector: &str, opacity: f64) -> Result<(), JsValue> {
    if let Some(layer) = root.query_selector(selector)? {
        html(layer)?
            .style()
            .set_property("opacity", &opacity.to_string())?;
    }
    Ok(())
}

fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("{what} failed: {e:?}");
    }
}

/// Whether the browser renders 3D transforms and CSS transitions.
fn detect_support(element: &HtmlElement) -> bool {
    let style = JsValue::from(element.style());
    ["transition", "perspective", "transformStyle"]
        .iter()
        .all(|p| js_sys::Reflect::has(&style, &JsValue::from_str(p)).unwrap_or(false))
}

/// The element being folded, plus the nodes the surface created in it.
pub(crate) struct DomSurface {
    document: Document,
    element: HtmlElement,
    support: bool,
    initial_content: Option<HtmlElement>,
    final_content: Option<HtmlElement>,
    final_wrapper: Option<HtmlElement>,
    top: Option<HtmlElement>,
    bottom: Option<HtmlElement>,
}

impl DomSurface {
    pub(crate) fn new(element: HtmlElement) -> Result<Self, FoldError> {
        let document = element
            .owner_document()
            .ok_or_else(|| FoldError::Dom("element has no owner document".to_owned()))?;
        Ok(Self {
            document,
            support: detect_support(&element),
            element,
            initial_content: None,
            final_content: None,
            final_wrapper: None,
            top: None,
            bottom: None,
        })
    }

    /// The folded element.
    pub(crate) fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// Classify a `transitionend` target: `None` if it is outside the
    /// current top panel, `Some(false)` for the panel itself and
    /// `Some(true)` for anything nested in it (the shadow overlays).
    pub(crate) fn transition_source(&self, target: &Element) -> Option<bool> {
        let top = self.top.as_ref()?;
        let target: &DomNode = target;
        if top.is_same_node(Some(target)) {
            Some(false)
        } else {
            top.contains(Some(target)).then_some(true)
        }
    }

    fn create_div(&self, classes: &[&str]) -> Result<HtmlElement, JsValue> {
        let div = html(self.document.create_element("div")?)?;
        let list = div.class_list();
        for class in classes {
            list.add_1(class)?;
        }
        Ok(div)
    }

    fn child_with_class(&self, class: &str) -> Result<HtmlElement, JsValue> {
        let found = self
            .element
            .query_selector(&format!(":scope > div.{class}"))?
            .ok_or_else(|| JsValue::from_str(&format!("missing div.{class}")))?;
        html(found)
    }

    fn wrap(&self, content: &HtmlElement, class: &str) -> Result<HtmlElement, JsValue> {
        let wrapper = self.create_div(&[class])?;
        let anchor: &DomNode = content;
        if let Some(parent) = content.parent_node() {
            let _ = parent.insert_before(&wrapper, Some(anchor))?;
        }
        let _ = wrapper.append_child(content)?;
        Ok(wrapper)
    }

    /// Wrap both contents and build the hidden final wrapper.
    fn layout(&mut self) -> Result<HtmlElement, JsValue> {
        let initial = self.child_with_class("uc-initial-content")?;
        let final_content = self.child_with_class("uc-final-content")?;

        let initial_wrap = self.wrap(&initial, "uc-initial")?;
        set_display(&final_content, "block")?;
        let final_wrap = self.wrap(&final_content, "uc-final")?;

        let wrapper = self.create_div(&["uc-final-wrapper"])?;
        let initial_copy = html(initial_wrap.clone_node_with_deep(true)?.dyn_into()?)?;
        let _ = wrapper.append_child(&initial_copy)?;
        let _ = wrapper.append_child(&final_wrap)?;
        let _ = self.element.append_child(&wrapper)?;

        self.initial_content = Some(initial);
        self.final_content = Some(final_content);
        Ok(wrapper)
    }

    fn try_install(&mut self, final_size: &Dimensions) -> Result<(), JsValue> {
        if self.final_wrapper.is_none() {
            self.final_wrapper = Some(self.layout()?);
        }
        if let Some(content) = &self.final_content {
            apply_style(
                content,
                &Style::new()
                    .with_px("width", final_size.width)
                    .with_px("height", final_size.height),
            )?;
        }
        self.remove_panels();
        self.try_hide_final()
    }

    fn slot_content(&self, slot: Slot) -> Result<DomNode, JsValue> {
        let template = match slot {
            Slot::Initial => self.initial_content.as_ref(),
            Slot::Final => self.final_content.as_ref(),
        }
        .ok_or_else(|| JsValue::from_str("content slots used before install"))?;
        template.clone_node_with_deep(true)
    }

    fn render(&self, node: &Node) -> Result<HtmlElement, JsValue> {
        let element = self.create_div(&node.classes)?;
        apply_style(&element, &node.style)?;
        for child in &node.children {
            let rendered: DomNode = match child {
                Child::Node(n) => self.render(n)?.into(),
                Child::Slot(slot) => self.slot_content(*slot)?,
            };
            let _ = element.append_child(&rendered)?;
        }
        Ok(element)
    }

    fn try_mount(&mut self, panels: &StepPanels) -> Result<(), JsValue> {
        self.remove_panels();
        let bottom = self.render(&panels.bottom)?;
        let top = self.render(&panels.top)?;
        let _ = self.element.append_child(&bottom)?;
        let _ = self.element.append_child(&top)?;
        self.bottom = Some(bottom);
        self.top = Some(top);
        Ok(())
    }

    fn remove_panels(&mut self) {
        for panel in [self.top.take(), self.bottom.take()].into_iter().flatten() {
            panel.remove();
        }
    }

    fn try_hide_final(&self) -> Result<(), JsValue> {
        let Some(wrapper) = &self.final_wrapper else {
            return Ok(());
        };
        set_display(wrapper, "none")?;
        let children = wrapper.children();
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                set_display(&html(child)?, "none")?;
            }
        }
        Ok(())
    }

    fn try_show_final(&self, style: &Style, face: Slot) -> Result<(), JsValue> {
        let wrapper = self
            .final_wrapper
            .as_ref()
            .ok_or_else(|| JsValue::from_str("final wrapper not installed"))?;
        apply_style(wrapper, style)?;
        set_display(wrapper, "block")?;
        let index = match face {
            Slot::Initial => 0,
            Slot::Final => 1,
        };
        if let Some(child) = wrapper.children().item(index) {
            set_display(&html(child)?, "block")?;
        }
        Ok(())
    }

    fn try_trigger(&self, trigger: &Trigger) -> Result<(), JsValue> {
        let (Some(top), Some(bottom)) = (&self.top, &self.bottom) else {
            return Ok(());
        };
        if trigger.flipped {
            top.class_list().add_1(UNFOLD_CLASS)?;
        } else {
            top.class_list().remove_1(UNFOLD_CLASS)?;
        }
        if let Some(targets) = trigger.overlays {
            set_opacity(bottom, ":scope > .uc-overlay", targets.bottom)?;
            set_opacity(top, ":scope > .uc-back > .uc-flipoverlay", targets.top_back)?;
            set_opacity(top, ":scope > .uc-front > .uc-flipoverlay", targets.top_front)?;
        }
        Ok(())
    }
}

impl Surface for DomSurface {
    fn supports_transitions(&self) -> bool {
        self.support
    }

    fn element_size(&self) -> (f64, f64) {
        (
            f64::from(self.element.client_width()),
            f64::from(self.element.client_height()),
        )
    }

    fn placement(&self) -> Placement {
        let rect = self.element.get_bounding_client_rect();
        let (viewport_width, viewport_height) = self
            .document
            .document_element()
            .map_or((0.0, 0.0), |root| {
                (f64::from(root.client_width()), f64::from(root.client_height()))
            });
        Placement {
            left: rect.left(),
            top: rect.top(),
            viewport_width,
            viewport_height,
        }
    }

    fn install(&mut self, final_size: &Dimensions) {
        let result = self.try_install(final_size);
        report("install", result);
    }

    fn style_container(&mut self, style: &Style) {
        report("container style", apply_style(&self.element, style));
    }

    fn set_active(&mut self, active: bool) {
        let list = self.element.class_list();
        let result = if active {
            list.add_1(ACTIVE_CLASS)
        } else {
            list.remove_1(ACTIVE_CLASS)
        };
        report("active marker", result);
    }

    fn mount(&mut self, panels: StepPanels) {
        let result = self.try_mount(&panels);
        report("mount", result);
    }

    fn clear_panels(&mut self) {
        self.remove_panels();
    }

    fn hide_final(&mut self) {
        report("hide final", self.try_hide_final());
    }

    fn show_final(&mut self, style: &Style, face: Slot) {
        report("show final", self.try_show_final(style, face));
    }

    fn trigger(&mut self, trigger: &Trigger) {
        report("trigger", self.try_trigger(trigger));
    }
}
