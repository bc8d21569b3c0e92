use crate::constants::*;
use crate::dom;
use plexus_core::widgets::Accordion;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_faq(document: &web::Document) -> anyhow::Result<()> {
    let questions = dom::query_all(document, FAQ_QUESTION);
    if questions.is_empty() {
        anyhow::bail!("missing {}", FAQ_QUESTION);
    }
    let (questions, items): (Vec<_>, Vec<_>) = questions
        .into_iter()
        .filter_map(|q| q.parent_element().map(|item| (q, item)))
        .unzip();
    let items = Rc::new(items);
    let accordion = Rc::new(RefCell::new(Accordion::new(items.len())));

    for (i, question) in questions.iter().enumerate() {
        let items = items.clone();
        let accordion = accordion.clone();
        let document = document.clone();
        dom::listen(question, "click", move |_ev: web::MouseEvent| {
            let mut acc = accordion.borrow_mut();
            acc.toggle(i);
            // Items without a question of their own still close
            for el in dom::query_all(&document, FAQ_ITEM) {
                dom::set_class(&el, ACTIVE_CLASS, false);
            }
            for (k, el) in items.iter().enumerate() {
                dom::set_class(el, ACTIVE_CLASS, acc.is_open(k));
            }
        });
    }
    Ok(())
}
