//! DOM project grid with pointer-driven tilt.
//!
//! Each card is an anchor built from a [`ProjectLink`]; its tilt state lives
//! in a per-card `Rc<RefCell<CardTilt>>` owned by the event closures and is
//! recomputed on every pointermove, reset on pointerleave.

use crate::input;
use crate::style;
use folio_core::{CardTilt, ProjectLink};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn mount_cards(
    document: &web::Document,
    container_id: &str,
    projects: &[ProjectLink],
) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{container_id}"))?;
    for link in projects {
        let card = build_card(document, link)?;
        wire_tilt(&card);
        container
            .append_child(&card)
            .map_err(|e| anyhow::anyhow!(format!("append card: {e:?}")))?;
    }
    log::info!("mounted {} project cards", projects.len());
    Ok(())
}

fn build_card(
    document: &web::Document,
    link: &ProjectLink,
) -> anyhow::Result<web::HtmlElement> {
    let make = |tag: &str| {
        document
            .create_element(tag)
            .map_err(|e| anyhow::anyhow!(format!("create <{tag}>: {e:?}")))
    };

    let anchor: web::HtmlAnchorElement = make("a")?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("not an anchor: {e:?}")))?;
    anchor.set_href(&link.href());
    anchor.set_target("_blank");
    anchor.set_rel("noopener noreferrer");
    anchor.set_class_name(style::accent_class(link.accent));

    let title = make("h3")?;
    title.set_text_content(Some(&link.title));
    let description = make("p")?;
    description.set_text_content(Some(&link.description));
    let domain = make("span")?;
    domain.set_class_name("card-domain");
    domain.set_text_content(Some(link.display_domain()));

    for child in [&title, &description, &domain] {
        anchor
            .append_child(child)
            .map_err(|e| anyhow::anyhow!(format!("append: {e:?}")))?;
    }

    let el: web::HtmlElement = anchor.unchecked_into();
    let _ = el
        .style()
        .set_property("animation-delay", &format!("{}ms", link.reveal_delay_ms()));
    Ok(el)
}

fn apply_tilt(el: &web::HtmlElement, tilt: &CardTilt) {
    let _ = el.style().set_property("transform", &style::card_transform(tilt));
    let _ = el
        .style()
        .set_property("--glow", &format!("{:.2}", style::glow_opacity(tilt)));
}

fn wire_tilt(card: &web::HtmlElement) {
    let tilt = Rc::new(RefCell::new(CardTilt::default()));

    {
        let tilt = tilt.clone();
        let el = card.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = el.get_bounding_client_rect();
            let (u, v) = input::card_uv(
                ev.client_x() as f32 - rect.left() as f32,
                ev.client_y() as f32 - rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            );
            let mut t = tilt.borrow_mut();
            t.pointer_move(u, v);
            apply_tilt(&el, &t);
        }) as Box<dyn FnMut(_)>);
        let _ = card
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let el = card.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            let mut t = tilt.borrow_mut();
            t.pointer_leave();
            apply_tilt(&el, &t);
        }) as Box<dyn FnMut(_)>);
        let _ = card
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
