/// Root component of FoodieCircle.
/// Provides the shared services as context and declares the route table.
use std::rc::Rc;

use leptos::logging::log;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

use crate::api::ApiClient;
use crate::auth::{AuthContext, FirebaseIdentity};
use crate::config::AppConfig;
use crate::guard::PrivateRoute;
use crate::pages::{
    add_review::AddReviewPage, all_reviews::AllReviewsPage, edit_review::EditReviewPage, home::HomePage,
    layout::MainLayout, login::LoginPage, my_favorites::MyFavoritesPage, my_reviews::MyReviewsPage,
    not_found::NotFound, register::RegisterPage, review_details::ReviewDetailsPage,
};
use crate::query::QueryClient;
use crate::toast::{Toaster, Toasts};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env();
    log!("[APP] using API at {}", config.api_base_url);

    let auth = AuthContext::new(Rc::new(FirebaseIdentity::new(config.identity_api_key.clone())));
    provide_context(ApiClient::new(config.clone()));
    provide_context(config);
    provide_context(QueryClient::new());
    provide_context(Toasts::new());
    provide_context(auth.clone());

    spawn_local(async move { auth.observe().await });

    view! {
        <Title text="FoodieCircle"/>
        <Router>
            <Routes>
                <Route path="/" view=MainLayout>
                    <Route path="" view=HomePage/>
                    <Route path="login" view=LoginPage/>
                    <Route path="register" view=RegisterPage/>
                    <Route path="all-reviews" view=AllReviewsPage/>
                    <Route path="review/:id" view=ReviewDetailsPage/>
                    <Route
                        path="add-review"
                        view=|| view! { <PrivateRoute><AddReviewPage/></PrivateRoute> }
                    />
                    <Route
                        path="my-reviews"
                        view=|| view! { <PrivateRoute><MyReviewsPage/></PrivateRoute> }
                    />
                    <Route
                        path="edit-review/:id"
                        view=|| view! { <PrivateRoute><EditReviewPage/></PrivateRoute> }
                    />
                    <Route
                        path="my-favorites"
                        view=|| view! { <PrivateRoute><MyFavoritesPage/></PrivateRoute> }
                    />
                    <Route path="*any" view=NotFound/>
                </Route>
            </Routes>
        </Router>
        <Toaster/>
    }
}
