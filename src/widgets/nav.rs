use crate::constants::*;
use crate::dom;
use plexus_core::widgets::{submenu_toggles_at, Dropdowns, NavMenu};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Open state for the mobile menu plus every registered dropdown container.
struct NavState {
    menu: NavMenu,
    dropdowns: Dropdowns,
    containers: Vec<web::Element>,
}

impl NavState {
    fn register(&mut self, container: web::Element) -> usize {
        let node: &web::Node = &container;
        if let Some(i) = self
            .containers
            .iter()
            .position(|c| c.is_same_node(Some(node)))
        {
            return i;
        }
        self.containers.push(container);
        self.containers.len() - 1
    }

    fn toggle_dropdown(&mut self, id: usize) {
        let open = self.dropdowns.toggle(id);
        if let Some(el) = self.containers.get(id) {
            dom::set_class(el, ACTIVE_CLASS, open);
        }
    }

    fn close_dropdowns(&mut self) {
        for id in self.dropdowns.close_all() {
            if let Some(el) = self.containers.get(id) {
                dom::set_class(el, ACTIVE_CLASS, false);
            }
        }
    }
}

pub fn wire_nav(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let toggle = dom::require(document, NAV_TOGGLE)?;
    let menu = dom::require(document, NAV_MENU)?;
    let state = Rc::new(RefCell::new(NavState {
        menu: NavMenu::default(),
        dropdowns: Dropdowns::default(),
        containers: Vec::new(),
    }));

    {
        let state = state.clone();
        let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_ev: web::MouseEvent| {
            let open = state.borrow_mut().menu.toggle();
            dom::set_class(&menu_el, ACTIVE_CLASS, open);
            dom::set_class(&toggle_el, ACTIVE_CLASS, open);
        });
    }

    for link in dom::query_all(document, NAV_LINK) {
        let dropdown_parent = link
            .next_element_sibling()
            .filter(|sib| sib.class_list().contains(DROPDOWN_MENU_CLASS))
            .and_then(|_| link.parent_element());
        let state = state.clone();
        match dropdown_parent {
            Some(parent) => {
                let id = state.borrow_mut().register(parent);
                dom::listen(&link, "click", move |ev: web::MouseEvent| {
                    ev.prevent_default();
                    state.borrow_mut().toggle_dropdown(id);
                });
            }
            None => {
                let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
                dom::listen(&link, "click", move |_ev: web::MouseEvent| {
                    state.borrow_mut().menu.close();
                    dom::set_class(&menu_el, ACTIVE_CLASS, false);
                    dom::set_class(&toggle_el, ACTIVE_CLASS, false);
                });
            }
        }
    }

    for link in dom::query_all(document, DROPDOWN_SUBMENU_LINK) {
        let Some(parent) = link.parent_element() else {
            continue;
        };
        let id = state.borrow_mut().register(parent);
        let state = state.clone();
        let window = window.clone();
        dom::listen(&link, "click", move |ev: web::MouseEvent| {
            let (width, _) = dom::inner_size(&window);
            if submenu_toggles_at(width as f64) {
                ev.prevent_default();
                state.borrow_mut().toggle_dropdown(id);
            }
        });
    }

    {
        let state = state.clone();
        dom::listen(document, "click", move |ev: web::MouseEvent| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .map(|el| {
                    matches!(el.closest(NAV_ITEM_DROPDOWN), Ok(Some(_)))
                        || matches!(el.closest(DROPDOWN_SUBMENU), Ok(Some(_)))
                })
                .unwrap_or(false);
            if !inside {
                state.borrow_mut().close_dropdowns();
            }
        });
    }
    log::info!(
        "[nav] wired with {} dropdown containers",
        state.borrow().containers.len()
    );
    Ok(())
}
