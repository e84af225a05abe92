//! Mounting the page onto the static markup
//!
//! Expected element ids: `posts-list`, `playlist-list`, `vinyl-shelf`,
//! `search`, `post-title`, `post-date`, `post-excerpt`, `post-save`,
//! `post-cancel`, `audio`, and optionally `track-info`.

use super::adapters::{
    AudioElementSink, BrowserPrompt, LocalStorageStore, TimeoutScheduler, TimerDispatch,
    WindowOpener,
};
use super::console::init_logging;
use crate::app::{FanPage, PageOptions, Platform};
use crate::config::AppConfig;
use crate::event::AppEvent;
use fanpage_core::types::{ElementRef, Mark, PostId};
use fanpage_core::SystemClock;
use fanpage_ui::EditorField;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlAudioElement, HtmlInputElement,
    HtmlTextAreaElement,
};

struct Dom {
    posts: Element,
    playlist: Element,
    shelf: Element,
    title: Element,
    date: Element,
    excerpt: Element,
    save: Element,
    track_info: Option<Element>,
}

struct Mounted {
    page: FanPage,
    dom: Dom,
    rendered_posts: usize,
}

type Shared = Rc<RefCell<Mounted>>;

fn by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))
}

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        element.text_content().unwrap_or_default()
    }
}

fn set_field_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Closest ancestor of the event target matching `selector`
fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

fn dispatch(shared: &Shared, event: AppEvent) {
    let Ok(mut mounted) = shared.try_borrow_mut() else {
        tracing::warn!("Dropping re-entrant {:?}", event);
        return;
    };
    // Only editor events touch the form; anything else would wipe a draft
    let editor_changed = match &event {
        AppEvent::EditPost { id } => mounted.page.store().get(id).is_some(),
        AppEvent::SubmitEditor | AppEvent::CancelEditor => true,
        _ => false,
    };
    if let Err(e) = mounted.page.handle(event) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }
    mounted.refresh(editor_changed);
}

impl Mounted {
    /// Mirror page state into the DOM
    fn refresh(&mut self, sync_form: bool) {
        if self.page.post_renders() != self.rendered_posts {
            self.dom.posts.set_inner_html(&self.page.posts_view().to_html());
            self.rendered_posts = self.page.post_renders();
        }

        let marks = self.page.marks();
        let rows = self.dom.playlist.children();
        let tiles = self.dom.shelf.children();
        for i in 0..self.page.catalog().len() {
            if let Some(row) = rows.item(i as u32) {
                let on = marks.is_marked(ElementRef::playlist(i), Mark::Playing);
                let _ = row.class_list().toggle_with_force(Mark::Playing.class_name(), on);
            }
            if let Some(tile) = tiles.item(i as u32) {
                for mark in [Mark::Playing, Mark::Previewing] {
                    let on = marks.is_marked(ElementRef::vinyl(i), mark);
                    let _ = tile.class_list().toggle_with_force(mark.class_name(), on);
                }
            }
        }

        if let (Some(info), Some(text)) = (&self.dom.track_info, self.page.now_playing()) {
            info.set_text_content(Some(text));
        }

        if !sync_form {
            return;
        }
        let editor = self.page.editor();
        set_field_value(&self.dom.title, &editor.form().title);
        set_field_value(&self.dom.date, &editor.form().date);
        set_field_value(&self.dom.excerpt, &editor.form().excerpt);
        self.dom.save.set_text_content(Some(editor.submit_label()));
    }
}

/// Mount the fan page
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging(&AppConfig::default().log_level);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let audio: HtmlAudioElement = by_id(&document, "audio")?.dyn_into()?;
    let preview_audio = HtmlAudioElement::new()?;
    preview_audio.set_preload("none");

    // Timers fire after mounting; the dispatcher finds the page through this
    let slot: Rc<RefCell<Weak<RefCell<Mounted>>>> = Rc::new(RefCell::new(Weak::new()));
    let timer_slot = Rc::clone(&slot);
    let on_timer: TimerDispatch = Rc::new(move |id, task| {
        if let Some(shared) = timer_slot.borrow().upgrade() {
            dispatch(&shared, AppEvent::TimerFired { id, task });
        }
    });

    let platform = Platform {
        kv: Box::new(LocalStorageStore::from_window(&window)?),
        clock: Box::new(SystemClock),
        sink: Box::new(AudioElementSink::new(audio.clone())),
        preview_sink: Box::new(AudioElementSink::new(preview_audio)),
        opener: Box::new(WindowOpener::new(window.clone())),
        prompt: Box::new(BrowserPrompt::new(window.clone())),
        scheduler: Box::new(TimeoutScheduler::new(window.clone(), on_timer)),
    };
    let page = FanPage::new(platform, PageOptions::default());

    let dom = Dom {
        posts: by_id(&document, "posts-list")?,
        playlist: by_id(&document, "playlist-list")?,
        shelf: by_id(&document, "vinyl-shelf")?,
        title: by_id(&document, "post-title")?,
        date: by_id(&document, "post-date")?,
        excerpt: by_id(&document, "post-excerpt")?,
        save: by_id(&document, "post-save")?,
        track_info: document.get_element_by_id("track-info"),
    };

    let shelf = page.shelf_view();
    dom.playlist.set_inner_html(&shelf.playlist_html());
    dom.shelf.set_inner_html(&shelf.vinyl_html());
    dom.posts.set_inner_html(&page.posts_view().to_html());

    let posts_el = dom.posts.clone();
    let playlist_el = dom.playlist.clone();
    let shelf_el = dom.shelf.clone();
    let form = (dom.title.clone(), dom.date.clone(), dom.excerpt.clone());
    let save_el = dom.save.clone();

    let shared: Shared = Rc::new(RefCell::new(Mounted {
        rendered_posts: page.post_renders(),
        page,
        dom,
    }));
    *slot.borrow_mut() = Rc::downgrade(&shared);

    // Post actions, delegated: the list is re-rendered
    let s = Rc::clone(&shared);
    listen(&posts_el, "click", move |event| {
        let action = closest(&event, ".edit-post")
            .map(|b| (b, true))
            .or_else(|| closest(&event, ".delete-post").map(|b| (b, false)));
        if let Some((button, edit)) = action {
            let id = PostId::new(button.get_attribute("data-id").unwrap_or_default());
            let event = if edit {
                AppEvent::EditPost { id }
            } else {
                AppEvent::DeletePost { id }
            };
            dispatch(&s, event);
        }
    })?;

    let s = Rc::clone(&shared);
    let search = by_id(&document, "search")?;
    let search_input = search.clone();
    listen(&search, "input", move |_| {
        let query = field_value(&search_input);
        dispatch(&s, AppEvent::SearchChanged { query });
    })?;

    let s = Rc::clone(&shared);
    listen(&save_el, "click", move |_| {
        let (title, date, excerpt) = &form;
        for (field, element) in [
            (EditorField::Title, title),
            (EditorField::Date, date),
            (EditorField::Excerpt, excerpt),
        ] {
            dispatch(
                &s,
                AppEvent::EditorInput {
                    field,
                    value: field_value(element),
                },
            );
        }
        dispatch(&s, AppEvent::SubmitEditor);
    })?;

    let s = Rc::clone(&shared);
    listen(&by_id(&document, "post-cancel")?, "click", move |_| {
        dispatch(&s, AppEvent::CancelEditor);
    })?;

    // Shelf elements are rendered once; bind each directly
    let rows = playlist_el.children();
    let tiles = shelf_el.children();
    let len = shared.borrow().page.catalog().len();
    for i in 0..len {
        if let Some(row) = rows.item(i as u32) {
            let s = Rc::clone(&shared);
            listen(&row, "click", move |_| {
                dispatch(&s, AppEvent::ActivateTrack { element: ElementRef::playlist(i) });
            })?;
        }
        if let Some(tile) = tiles.item(i as u32) {
            let element = ElementRef::vinyl(i);
            let s = Rc::clone(&shared);
            listen(&tile, "mouseenter", move |_| {
                dispatch(&s, AppEvent::PreviewStart { element });
            })?;
            let s = Rc::clone(&shared);
            listen(&tile, "mouseleave", move |_| {
                dispatch(&s, AppEvent::PreviewStop { element });
            })?;
            let s = Rc::clone(&shared);
            listen(&tile, "click", move |_| {
                dispatch(&s, AppEvent::ActivateTrack { element });
            })?;
        }
    }

    for (kind, event) in [
        ("play", AppEvent::AudioPlay),
        ("pause", AppEvent::AudioPause),
        ("ended", AppEvent::AudioEnded),
    ] {
        let s = Rc::clone(&shared);
        listen(&audio, kind, move |_| dispatch(&s, event.clone()))?;
    }

    shared.borrow_mut().refresh(true);
    Ok(())
}
