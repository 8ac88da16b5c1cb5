//! Users, favorites aggregate and favorites link endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn users_list_hides_email_and_password() {
    let app = TestApp::new().await;
    let luke = app.add_user("luke").await;
    let leia = app.add_user("leia").await;

    let (status, body) = app.get("/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": luke.id, "user_name": "luke"},
            {"id": leia.id, "user_name": "leia"}
        ])
    );
}

#[tokio::test]
async fn favorites_of_unknown_user_is_404() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/user/5/favorites").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"msg": "this user not exist :("}));
}

#[tokio::test]
async fn user_without_favorites_is_400() {
    let app = TestApp::new().await;
    let user = app.add_user("han").await;

    let (status, body) = app.get(&format!("/user/{}/favorites", user.id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"msg": "this user dont have favorites planets and characters"})
    );
}

#[tokio::test]
async fn add_favorite_planet_returns_denormalized_link() {
    let app = TestApp::new().await;
    let user = app.add_user("luke").await;
    let planet_id = app.add_planet("Tatooine").await;

    let (status, body) = app
        .post(&format!("/user/{}/favorites/planet/{planet_id}", user.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "planet_id": planet_id,
            "planet_fav_name": "Tatooine",
            "user_name": "luke",
            "user_id": user.id
        })
    );

    let (status, body) = app.get(&format!("/user/{}/favorites", user.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "planets_fav_list": [{
                "user_id": user.id,
                "user_name": "luke",
                "planet_fav_id": planet_id,
                "planet_name": "Tatooine"
            }],
            "chars_fav_list": []
        })
    );
}

#[tokio::test]
async fn duplicate_favorite_planet_is_400_and_listed_once() {
    let app = TestApp::new().await;
    let user = app.add_user("luke").await;
    let planet_id = app.add_planet("Dagobah").await;
    let uri = format!("/user/{}/favorites/planet/{planet_id}", user.id);

    let (status, _) = app.post(&uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = app.post(&uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"msg": "that planet already exist"}));

    let (_, body) = app.get(&format!("/user/{}/favorites", user.id)).await;
    assert_eq!(body["planets_fav_list"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn add_favorite_planet_requires_both_ends() {
    let app = TestApp::new().await;
    let user = app.add_user("luke").await;
    let planet_id = app.add_planet("Bespin").await;

    let (status, body) = app
        .post(&format!("/user/{}/favorites/planet/404", user.id), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"msg": "the planet or the user not esxist :("}));

    let (status, _) = app
        .post(&format!("/user/404/favorites/planet/{planet_id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn remove_favorite_planet() {
    let app = TestApp::new().await;
    let user = app.add_user("luke").await;
    let planet_id = app.add_planet("Endor").await;
    app.post(&format!("/user/{}/favorites/planet/{planet_id}", user.id), None)
        .await;

    let uri = format!("/delete/favorites/user/{}/planet/{planet_id}", user.id);
    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"msg": "planet deleted!"}));

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"msg": "this user or this planet not exist"}));
}

#[tokio::test]
async fn favorite_people_lifecycle() {
    let app = TestApp::new().await;
    let user = app.add_user("leia").await;
    let han = app.add_person("Han Solo").await;
    let add_uri = format!("/user/{}/favorites/people/{han}", user.id);

    let (status, body) = app.post(&add_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "people_id": han,
            "people_fav_name": "Han Solo",
            "user_name": "leia",
            "user_id": user.id
        })
    );

    let (status, body) = app.post(&add_uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"msg": "this character already exist"}));

    let (_, body) = app.get(&format!("/user/{}/favorites", user.id)).await;
    assert_eq!(
        body["chars_fav_list"],
        json!([{
            "user_id": user.id,
            "user_name": "leia",
            "char_fav_id": han,
            "char_name": "Han Solo"
        }])
    );
    assert_eq!(body["planets_fav_list"], json!([]));

    let remove_uri = format!("/delete/favorites/user/{}/people/{han}", user.id);
    let (status, body) = app.delete(&remove_uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"msg": "character deleted!"}));

    let (status, body) = app.delete(&remove_uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"msg": "this user or this character not exist"}));
}

#[tokio::test]
async fn add_favorite_person_requires_both_ends() {
    let app = TestApp::new().await;
    let (status, body) = app.post("/user/1/favorites/people/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"msg": "the character or the user not esxist :("}));
}

#[tokio::test]
async fn deleting_a_planet_drops_its_favorite_links() {
    let app = TestApp::new().await;
    let user = app.add_user("luke").await;
    let planet_id = app.add_planet("Alderaan").await;
    app.post(&format!("/user/{}/favorites/planet/{planet_id}", user.id), None)
        .await;

    let (status, _) = app.delete(&format!("/planets/delete/{planet_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&format!("/user/{}/favorites", user.id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn favorites_are_listed_in_insertion_order() {
    let app = TestApp::new().await;
    let user = app.add_user("rey").await;
    let jakku = app.add_planet("Jakku").await;
    let ach_to = app.add_planet("Ahch-To").await;
    for id in [jakku, ach_to] {
        app.post(&format!("/user/{}/favorites/planet/{id}", user.id), None)
            .await;
    }

    let (_, body) = app.get(&format!("/user/{}/favorites", user.id)).await;
    let ids: Vec<_> = body["planets_fav_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["planet_fav_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [jakku, ach_to]);
}
