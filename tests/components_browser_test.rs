use std::time::Duration;

use foodiecircle::components::reviews_list::ReviewsList;
use foodiecircle::components::star_rating::StarRatingInput;
use foodiecircle::models::{Favorite, Review};
use foodiecircle::toast::{Toaster, Toasts};
use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::Router;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn test_container(id: &str) -> web_sys::HtmlElement {
    let document = leptos::document();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.dyn_into::<web_sys::HtmlElement>().unwrap()
}

fn click(container: &web_sys::HtmlElement, selector: &str) {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

fn review(id: &str, food: &str) -> Review {
    Review {
        id: id.to_string(),
        food_name: food.to_string(),
        food_image: "https://img.test/food.jpg".to_string(),
        restaurant_name: "Star Kabab".to_string(),
        location: "Dhanmondi".to_string(),
        rating: 4.0,
        review_text: "Juicy kebabs and soft naan.".to_string(),
        ..Default::default()
    }
}

#[wasm_bindgen_test]
async fn star_click_reports_value() {
    let container = test_container("stars-test");
    let picked = create_rw_signal(0u8);

    mount_to(container.clone(), move || {
        view! { <StarRatingInput value=picked on_pick=move |star: u8| picked.set(star)/> }
    });
    sleep(Duration::from_millis(50)).await;

    click(&container, "button[data-star='3']");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(picked.get_untracked(), 3);
    let caption = container.text_content().unwrap_or_default();
    assert!(caption.contains("You selected: 3 / 5"), "caption was {caption:?}");

    container.remove();
}

#[wasm_bindgen_test]
async fn toaster_shows_and_dismisses_on_click() {
    let container = test_container("toaster-test");
    let toasts = create_rw_signal(None::<Toasts>);

    mount_to(container.clone(), move || {
        let ctx = Toasts::new();
        provide_context(ctx);
        toasts.set(Some(ctx));
        view! { <Toaster/> }
    });
    sleep(Duration::from_millis(50)).await;

    let ctx = toasts.get_untracked().unwrap();
    ctx.success("Added to favorites");
    sleep(Duration::from_millis(50)).await;

    let alert = container.query_selector(".alert-success").unwrap();
    assert!(alert.is_some(), "success toast was not rendered");
    assert!(container.text_content().unwrap_or_default().contains("Added to favorites"));

    click(&container, ".alert-success");
    sleep(Duration::from_millis(50)).await;
    assert!(container.query_selector(".alert").unwrap().is_none());

    container.remove();
}

#[wasm_bindgen_test]
async fn toast_expires_on_its_own() {
    let container = test_container("toast-expiry-test");
    let toasts = create_rw_signal(None::<Toasts>);

    mount_to(container.clone(), move || {
        let ctx = Toasts::new();
        provide_context(ctx);
        toasts.set(Some(ctx));
        view! { <Toaster/> }
    });
    sleep(Duration::from_millis(50)).await;

    toasts.get_untracked().unwrap().info("Already in your favorites");
    sleep(Duration::from_millis(50)).await;
    assert!(container.query_selector(".alert-info").unwrap().is_some());

    sleep(Duration::from_millis(3200)).await;
    assert!(container.query_selector(".alert-info").unwrap().is_none());

    container.remove();
}

#[wasm_bindgen_test]
async fn saved_reviews_show_filled_heart() {
    let container = test_container("reviews-list-test");
    let clicked = create_rw_signal(None::<String>);

    mount_to(container.clone(), move || {
        let favorites = vec![Favorite {
            id: "fav-1".to_string(),
            review_id: "r1".to_string(),
            ..Default::default()
        }];
        let on_favorite = Callback::new(move |review: Review| clicked.set(Some(review.id)));
        view! {
            <Router>
                <ReviewsList
                    reviews=vec![review("r1", "Kacchi"), review("r2", "Borhani")]
                    favorites=Signal::derive(move || favorites.clone())
                    on_favorite=Some(on_favorite)
                />
            </Router>
        }
    });
    sleep(Duration::from_millis(50)).await;

    let cards = container.query_selector_all("article").unwrap();
    assert_eq!(cards.length(), 2);
    assert_eq!(container.query_selector_all(".text-red-500").unwrap().length(), 1);

    click(&container, "article:nth-of-type(2) button[title='Add to favorites']");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(clicked.get_untracked().as_deref(), Some("r2"));

    container.remove();
}
