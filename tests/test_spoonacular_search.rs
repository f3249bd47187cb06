use mockito::{Matcher, Server};
use recipe_finder::{RecipeSearch, SearchError};

const FIND_BY_INGREDIENTS: &str = "/recipes/findByIngredients";

fn search_for(server: &Server) -> RecipeSearch {
    RecipeSearch::builder()
        .api_key("test_key")
        .base_url(server.url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_search_maps_recipes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", FIND_BY_INGREDIENTS)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apiKey".into(), "test_key".into()),
            Matcher::UrlEncoded("ingredients".into(), "rice, dal, onion".into()),
            Matcher::UrlEncoded("number".into(), "10".into()),
            Matcher::UrlEncoded("ranking".into(), "2".into()),
            Matcher::UrlEncoded("cuisine".into(), "Indian".into()),
            Matcher::UrlEncoded("sort".into(), "max-used-ingredients".into()),
            Matcher::UrlEncoded("instructionsRequired".into(), "true".into()),
            Matcher::UrlEncoded("addRecipeInformation".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {
                    "id": 1001,
                    "title": "Masoor Dal",
                    "image": "https://img.spoonacular.com/recipes/1001-312x231.jpg",
                    "usedIngredientCount": 2,
                    "usedIngredients": [{"name": "Rice"}, {"name": "Dal"}]
                },
                {
                    "id": 1002,
                    "title": "Onion Pulao",
                    "usedIngredients": [{"name": "rice"}, {"name": "onion"}]
                }
            ]"#,
        )
        .create_async()
        .await;

    let recipes = search_for(&server)
        .search("  rice, dal, onion  ")
        .await
        .unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].id(), "1001");
    assert_eq!(recipes[0].title(), "Masoor Dal");
    assert_eq!(recipes[0].used_ingredients(), ["Rice", "Dal"]);
    assert_eq!(
        recipes[0].image_url(),
        Some("https://img.spoonacular.com/recipes/1001-636x393.jpg")
    );
    assert_eq!(
        recipes[0].recipe_url(),
        "https://spoonacular.com/recipes/-1001"
    );
    assert_eq!(recipes[1].image_url(), None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_empty_response_is_ok() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", FIND_BY_INGREDIENTS)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let recipes = search_for(&server).search("saffron").await.unwrap();
    assert!(recipes.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_http_error_keeps_status() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", FIND_BY_INGREDIENTS)
        .match_query(Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "failure", "code": 401, "message": "Invalid API key"}"#)
        .expect(1)
        .create_async()
        .await;

    let err = search_for(&server).search("rice").await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(matches!(
        err,
        SearchError::ProviderFailure {
            status: Some(401),
            ..
        }
    ));
    // A failure is surfaced once, never retried
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_server_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", FIND_BY_INGREDIENTS)
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let err = search_for(&server).search("rice").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_search_blank_input_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", FIND_BY_INGREDIENTS)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let search = search_for(&server);
    for text in ["", " ", "\n\t  "] {
        assert!(matches!(
            search.search(text).await,
            Err(SearchError::EmptyQuery)
        ));
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_html_body_is_malformed() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", FIND_BY_INGREDIENTS)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body>Service Unavailable</body></html>")
        .create_async()
        .await;

    let err = search_for(&server).search("rice").await.unwrap_err();
    assert!(matches!(err, SearchError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_search_connection_refused() {
    // Nothing listens on port 9 on test machines
    let search = RecipeSearch::builder()
        .api_key("test_key")
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let err = search.search("rice").await.unwrap_err();
    assert!(matches!(
        err,
        SearchError::ProviderFailure { status: None, .. }
    ));
}
