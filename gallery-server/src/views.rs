//! HTML views
//!
//! Binds the core view descriptions to markup. Discovered pages are not
//! known when the reader page is sent, so the reader subscribes to the page
//! stream and appends each image as it arrives. The index carries every card
//! with its search keys and re-filters them in place as the query changes.

use gallery_core::nav::{activate, NavAction, NavControl, ScrollBehavior, ScrollDirection};
use gallery_core::render::{CatalogView, MetaHeader, PageImage};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#111;color:#eee}\
header,main{max-width:960px;margin:0 auto;padding:1rem}\
a{color:#9cf}\
.alert{background:#633;padding:.5rem 1rem;border-radius:4px}\
#grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:1rem}\
.card{background:#222;border-radius:6px;overflow:hidden}\
.thumb{width:100%;aspect-ratio:3/4;object-fit:cover;display:block}\
.card-body{padding:.5rem}\
.meta{color:#aaa;font-size:.9rem}\
#reader img{display:block;max-width:100%;margin:0 auto 1rem}\
nav.controls{position:fixed;right:1rem;bottom:1rem;display:flex;gap:.5rem}";

const STREAM_SCRIPT: &str = r#"
(function () {
  var reader = document.getElementById('reader');
  var src = reader && reader.dataset.stream;
  if (!src) return;
  var events = new EventSource(src);
  events.addEventListener('page', function (e) {
    var page = JSON.parse(e.data);
    var img = document.createElement('img');
    img.loading = 'lazy';
    img.src = page.url;
    img.alt = page.alt;
    reader.appendChild(img);
  });
  events.addEventListener('done', function () { events.close(); });
  events.onerror = function () { events.close(); };
})();
"#;

const FILTER_SCRIPT: &str = r#"
(function () {
  var search = document.getElementById('search');
  var form = document.getElementById('search-form');
  var empty = document.getElementById('empty');
  var cards = document.querySelectorAll('#grid .card-link');
  if (!search) return;
  function apply() {
    var q = search.value.trim().toLowerCase();
    var shown = 0;
    cards.forEach(function (card) {
      var keys = card.dataset;
      var match = !q || keys.title.indexOf(q) !== -1 ||
        keys.artist.indexOf(q) !== -1 || keys.tags.indexOf(q) !== -1;
      card.hidden = !match;
      if (match) shown++;
    });
    empty.hidden = shown > 0;
  }
  search.addEventListener('input', apply);
  form.addEventListener('submit', function (e) { e.preventDefault(); apply(); });
})();
"#;

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body { (body) }
        }
    }
}

/// JavaScript for a navigation control's `onclick`
pub fn nav_handler(control: NavControl) -> String {
    match activate(control) {
        NavAction::Scroll {
            direction,
            behavior,
        } => {
            let sign = match direction {
                ScrollDirection::Backward => "-",
                ScrollDirection::Forward => "",
            };
            let behavior = match behavior {
                ScrollBehavior::Smooth => "smooth",
            };
            format!(
                "window.scrollBy({{ top: {}window.innerHeight, behavior: '{}' }})",
                sign, behavior
            )
        }
        NavAction::ShowMessage { message } => {
            let quoted = serde_json::to_string(message).unwrap_or_default();
            format!("event.preventDefault(); alert({})", quoted)
        }
    }
}

/// Index page; `view.query` only sets the initial state
pub fn index_page(view: &CatalogView, alert: Option<&str>) -> Markup {
    layout(
        "Gallery",
        html! {
            header {
                h1 { "Gallery" }
                @if let Some(alert) = alert {
                    div.alert role="alert" { (alert) }
                }
                form #search-form method="get" action="/" {
                    input #search type="search" name="q" value=(view.query) placeholder="Search title, artist or tag";
                }
            }
            main {
                div #grid {
                    @for entry in &view.entries {
                        @let card = &entry.card;
                        a.card-link hidden[!entry.visible] href=(card.href)
                            data-title=(entry.keys.title) data-artist=(entry.keys.artist) data-tags=(entry.keys.tags) {
                            div.card {
                                img.thumb src=(card.cover_url) alt=(card.cover_alt) loading="lazy";
                                div.card-body {
                                    h3 { (card.title) }
                                    div.meta { (card.byline) }
                                    span.read { "Read" }
                                }
                            }
                        }
                    }
                }
                p #empty hidden[!view.empty] { "No works found." }
            }
            script { (PreEscaped(FILTER_SCRIPT)) }
        },
    )
}

/// Reader page; `stream` is set when pages are still to be discovered
pub fn reader_page(
    header: &MetaHeader,
    pages: &[PageImage],
    stream: Option<&str>,
    download_href: &str,
) -> Markup {
    layout(
        &header.title,
        html! {
            header {
                a href="/" { "← Index" }
                h1 #title { (header.title) }
                div #meta {
                    strong { (header.title) }
                    div.meta { (header.details) }
                }
            }
            main {
                div #reader data-stream=[stream] {
                    @for page in pages {
                        img src=(page.url) alt=(page.alt) loading=[page.lazy.then_some("lazy")];
                    }
                }
            }
            nav.controls {
                button #prevBtn type="button" onclick=(nav_handler(NavControl::Previous)) { "Prev" }
                button #nextBtn type="button" onclick=(nav_handler(NavControl::Next)) { "Next" }
                a #downloadAll href=(download_href) onclick=(nav_handler(NavControl::Download)) { "Download" }
            }
            @if stream.is_some() {
                script { (PreEscaped(STREAM_SCRIPT)) }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::render::{render_card, CatalogEntry, Links};
    use gallery_core::{SearchKeys, WorkRecord};

    #[test]
    fn test_nav_handlers() {
        assert_eq!(
            nav_handler(NavControl::Previous),
            "window.scrollBy({ top: -window.innerHeight, behavior: 'smooth' })"
        );
        assert_eq!(
            nav_handler(NavControl::Next),
            "window.scrollBy({ top: window.innerHeight, behavior: 'smooth' })"
        );
        let download = nav_handler(NavControl::Download);
        assert!(download.starts_with("event.preventDefault(); alert(\"To download images"));
    }

    fn entry(slug: &str, title: &str, visible: bool) -> CatalogEntry {
        let work = WorkRecord::new(slug).with_title(title).with_tag("Sea");
        CatalogEntry {
            card: render_card(&Links::new("/works", "/reader"), &work),
            keys: SearchKeys::of(&work),
            visible,
        }
    }

    #[test]
    fn test_index_page_escapes_content() {
        let view = CatalogView {
            query: String::new(),
            entries: vec![entry("x", "<script>", true)],
            empty: false,
        };
        let html = index_page(&view, None).into_string();
        assert!(html.contains("<h3>&lt;script&gt;</h3>"));
        assert!(!html.contains("<h3><script>"));
        assert!(html.contains(r#"data-title="&lt;script&gt;""#));
        // Cards are shown, so the empty-state message is hidden
        assert!(html.contains("hidden>No works found."));
    }

    #[test]
    fn test_index_page_filters_in_place() {
        let view = CatalogView {
            query: "moth".to_string(),
            entries: vec![entry("moth", "Moth Season", true), entry("harbor", "Harbor", false)],
            empty: false,
        };
        let html = index_page(&view, None).into_string();

        assert!(html.contains(
            r#"<a class="card-link" href="/reader?slug=moth" data-title="moth season" data-artist="" data-tags="sea">"#
        ));
        assert!(html.contains(
            r#"<a class="card-link" hidden href="/reader?slug=harbor" data-title="harbor""#
        ));
        assert!(html.contains("addEventListener('input', apply)"));
        assert!(html.contains("keys.tags.indexOf(q)"));
    }

    #[test]
    fn test_index_page_empty_state() {
        let view = CatalogView {
            query: "zebra".to_string(),
            entries: vec![entry("moth", "Moth Season", false)],
            empty: true,
        };
        let html = index_page(&view, Some("No slug specified")).into_string();
        assert!(html.contains("No works found."));
        assert!(!html.contains("hidden>No works found."));
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("No slug specified"));
        assert!(html.contains(r#"value="zebra""#));
    }

    #[test]
    fn test_reader_page_stream_script() {
        let header = MetaHeader {
            title: "moth".to_string(),
            details: String::new(),
        };
        let html = reader_page(&header, &[], Some("/api/v1/works/moth/pages/stream"), "#")
            .into_string();
        assert!(html.contains(r#"data-stream="/api/v1/works/moth/pages/stream""#));
        assert!(html.contains("EventSource"));

        let html = reader_page(&header, &[], None, "#").into_string();
        assert!(!html.contains("EventSource"));
    }
}
