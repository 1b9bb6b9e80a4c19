//! UI components and pages.
//!
//! This module provides Leptos SSR components for the guest-facing pages.
//! Nothing here is hydrated: views are rendered once per request to a string.
//!
//! # Structure
//!
//! - [`components`]: Reusable components (logo, icons)
//! - [`layout`]: Guest document shell
//! - [`welcome`]: Landing page

pub mod components;
pub mod layout;
pub mod welcome;

use leptos::prelude::*;

/// Render a view to HTML under a fresh root owner.
pub fn render_fragment<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new_root(None);
    owner.with(|| view().to_html())
}

/// Render a full document. Leptos doesn't emit the doctype, so it's added here.
pub fn render_document<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    format!("<!DOCTYPE html>\n{}", render_fragment(view))
}
