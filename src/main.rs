mod components;
mod model;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::components::app::App;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn renders_the_seeded_leaderboard() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<App>::with_root(root).render();

        // Rendering is scheduled; poll until the rows land.
        let mut rows = 0;
        for _ in 0..100 {
            TimeoutFuture::new(10).await;
            rows = document
                .query_selector_all("[data-group-id]")
                .map(|list| list.length())
                .unwrap_or(0);
            if rows == 8 {
                break;
            }
        }
        assert_eq!(rows, 8);

        let first = document
            .query_selector("[data-group-id]")
            .unwrap()
            .unwrap();
        let text = first.text_content().unwrap_or_default();
        assert!(text.contains("Tech Innovators"));
        assert!(text.contains("#1"));
        assert!(text.contains("156"));
    }

    #[wasm_bindgen_test]
    async fn page_shows_the_seeded_totals() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<App>::with_root(root).render();

        let mut body_text = String::new();
        for _ in 0..100 {
            TimeoutFuture::new(10).await;
            body_text = document
                .body()
                .and_then(|b| b.text_content())
                .unwrap_or_default();
            if body_text.contains("1,842") {
                break;
            }
        }
        assert!(body_text.contains("247"));
        assert!(body_text.contains("1,842"));
        assert!(body_text.contains("Tournament ends in"));
    }
}
