// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained element tree.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{AttrValue, SurfaceError};

/// Stable identity of an element within one [`Surface`].
///
/// Ids are never reused, so a stale id held across a re-render resolves to nothing rather than
/// to an unrelated element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Pointer transitions that elements can bind handlers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// The pointer moved onto the element.
    Enter,
    /// The pointer moved off the element.
    Leave,
}

/// One element in the tree.
#[derive(Clone, Debug)]
pub struct Element<H> {
    tag: &'static str,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attrs: SmallVec<[(&'static str, AttrValue); 4]>,
    styles: SmallVec<[(&'static str, String); 2]>,
    text: Option<String>,
    handlers: SmallVec<[(PointerEvent, H); 2]>,
}

impl<H> Element<H> {
    fn new(tag: &'static str, parent: Option<ElementId>) -> Self {
        Self {
            tag,
            parent,
            children: Vec::new(),
            attrs: SmallVec::new(),
            styles: SmallVec::new(),
            text: None,
            handlers: SmallVec::new(),
        }
    }

    /// The element tag (`g`, `circle`, `div`, ...).
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The parent element, `None` for the root.
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Children in document order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Returns an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> {
        self.attrs.iter().map(|(n, v)| (*n, v))
    }

    /// Returns a style property by name.
    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Style properties in insertion order.
    pub fn styles(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.styles.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// The element's own text, if any (not including descendants).
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Whether the space-separated `class` attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        match self.attr("class") {
            Some(AttrValue::Text(list)) => list.split_ascii_whitespace().any(|c| c == class),
            _ => false,
        }
    }

    /// Whether a handler is bound for `event`.
    pub fn is_bound(&self, event: PointerEvent) -> bool {
        self.handlers.iter().any(|(e, _)| *e == event)
    }
}

/// A retained tree of elements with id lookup and pointer bindings.
///
/// `H` is the handler payload stored per binding. The surface never invokes handlers; callers
/// look them up with [`Surface::handler`] and dispatch with whatever context they own.
#[derive(Clone, Debug)]
pub struct Surface<H> {
    slots: Vec<Option<Element<H>>>,
    ids: HashMap<String, ElementId>,
    root: ElementId,
}

impl<H> Surface<H> {
    /// Creates a surface holding a single root element.
    pub fn new(root_tag: &'static str) -> Self {
        let mut slots = Vec::new();
        slots.push(Some(Element::new(root_tag, None)));
        Self {
            slots,
            ids: HashMap::new(),
            root: ElementId(0),
        }
    }

    /// The root element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Returns an element if it is live.
    pub fn get(&self, id: ElementId) -> Option<&Element<H>> {
        self.slots.get(id.0 as usize).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: ElementId) -> Result<&mut Element<H>, SurfaceError> {
        self.slots
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(SurfaceError::UnknownElement(id))
    }

    /// Returns the element carrying the `id` attribute `id`.
    pub fn select(&self, id: &str) -> Option<ElementId> {
        self.ids.get(id).copied()
    }

    /// Creates a new element as the last child of `parent`.
    pub fn append(
        &mut self,
        parent: ElementId,
        tag: &'static str,
    ) -> Result<ElementId, SurfaceError> {
        let index = u32::try_from(self.slots.len()).map_err(|_| SurfaceError::Exhausted)?;
        let id = ElementId(index);
        self.get_mut(parent)?.children.push(id);
        self.slots.push(Some(Element::new(tag, Some(parent))));
        Ok(id)
    }

    /// Sets (or replaces) an attribute.
    ///
    /// Setting `id` registers the element for [`Surface::select`]; ids must be unique among live
    /// elements.
    pub fn set_attr(
        &mut self,
        el: ElementId,
        name: &'static str,
        value: impl Into<AttrValue>,
    ) -> Result<(), SurfaceError> {
        let value = value.into();
        if name == "id" {
            let key = value.to_string();
            match self.ids.get(&key) {
                Some(existing) if *existing != el => return Err(SurfaceError::DuplicateId(key)),
                _ => {}
            }
            let previous = self.get_mut(el)?.attr("id").map(ToString::to_string);
            if let Some(previous) = previous {
                self.ids.remove(&previous);
            }
            self.ids.insert(key, el);
        }
        let element = self.get_mut(el)?;
        match element.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => element.attrs.push((name, value)),
        }
        Ok(())
    }

    /// Returns an attribute of a live element.
    pub fn attr(&self, el: ElementId, name: &str) -> Option<&AttrValue> {
        self.get(el).and_then(|e| e.attr(name))
    }

    /// Sets (or replaces) a style property.
    pub fn set_style(
        &mut self,
        el: ElementId,
        name: &'static str,
        value: impl Into<String>,
    ) -> Result<(), SurfaceError> {
        let value = value.into();
        let element = self.get_mut(el)?;
        match element.styles.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => element.styles.push((name, value)),
        }
        Ok(())
    }

    /// Returns a style property of a live element.
    pub fn style(&self, el: ElementId, name: &str) -> Option<&str> {
        self.get(el).and_then(|e| e.style(name))
    }

    /// Sets the element's own text.
    pub fn set_text(&mut self, el: ElementId, text: impl Into<String>) -> Result<(), SurfaceError> {
        self.get_mut(el)?.text = Some(text.into());
        Ok(())
    }

    /// Concatenated text of the element and its descendants, in document order.
    pub fn text_content(&self, el: ElementId) -> String {
        let mut out = String::new();
        for id in self.descendants(el) {
            if let Some(t) = self.get(id).and_then(Element::text) {
                out.push_str(t);
            }
        }
        out
    }

    /// Binds `handler` to `event` on `el`, replacing an earlier binding for the same event.
    pub fn bind(
        &mut self,
        el: ElementId,
        event: PointerEvent,
        handler: H,
    ) -> Result<(), SurfaceError> {
        let element = self.get_mut(el)?;
        match element.handlers.iter_mut().find(|(e, _)| *e == event) {
            Some((_, slot)) => *slot = handler,
            None => element.handlers.push((event, handler)),
        }
        Ok(())
    }

    /// Returns the handler bound to `event` on `el`.
    pub fn handler(&self, el: ElementId, event: PointerEvent) -> Option<&H> {
        self.get(el)?
            .handlers
            .iter()
            .find(|(e, _)| *e == event)
            .map(|(_, h)| h)
    }

    /// Removes every descendant of `el`, keeping `el` itself.
    pub fn clear_children(&mut self, el: ElementId) -> Result<(), SurfaceError> {
        let children = core::mem::take(&mut self.get_mut(el)?.children);
        for child in children {
            self.drop_subtree(child);
        }
        Ok(())
    }

    /// Detaches `el` from its parent and removes it with all descendants.
    ///
    /// The root cannot be removed; use [`Surface::clear_children`] instead.
    pub fn remove(&mut self, el: ElementId) -> Result<(), SurfaceError> {
        let parent = self
            .get(el)
            .ok_or(SurfaceError::UnknownElement(el))?
            .parent
            .ok_or(SurfaceError::UnknownElement(el))?;
        self.get_mut(parent)?.children.retain(|c| *c != el);
        self.drop_subtree(el);
        Ok(())
    }

    fn drop_subtree(&mut self, el: ElementId) {
        let Some(element) = self.slots.get_mut(el.0 as usize).and_then(Option::take) else {
            return;
        };
        if let Some(id) = element.attr("id").map(ToString::to_string)
            && self.ids.get(&id) == Some(&el)
        {
            self.ids.remove(&id);
        }
        for child in element.children {
            self.drop_subtree(child);
        }
    }

    /// `el` followed by all of its descendants, in document (pre-)order.
    pub fn descendants(&self, el: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = alloc::vec![el];
        while let Some(id) = stack.pop() {
            let Some(element) = self.get(id) else {
                continue;
            };
            out.push(id);
            stack.extend(element.children.iter().rev().copied());
        }
        out
    }

    /// Descendants of `scope` (inclusive) whose class list contains `class`.
    pub fn select_class(&self, scope: ElementId, class: &str) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.get(*id).is_some_and(|e| e.has_class(class)))
            .collect()
    }

    /// Number of live elements, including the root.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Always `false`: a surface has at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }
}
