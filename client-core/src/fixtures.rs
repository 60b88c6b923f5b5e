//! Seed data for the simulated backend.
//!
//! Stands in for the server's database: a handful of accounts, the category
//! reference data, and a set of live streams with staggered start times so
//! the trending rail has an obvious order.

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{Category, Stream, StreamCategory, User};

pub fn seed_users() -> Vec<User> {
    vec![
        user(
            "GameMaster",
            "gamemaster@example.com",
            "Professional gamer and content creator",
            50_000,
            100,
            true,
            (2023, 1, 1),
        ),
        user(
            "MusicLover",
            "music@example.com",
            "Sharing my love for music with the world",
            25_000,
            250,
            true,
            (2023, 2, 15),
        ),
        user(
            "ArtisticSoul",
            "artist@example.com",
            "Digital artist and illustrator",
            15_000,
            300,
            false,
            (2023, 3, 20),
        ),
    ]
}

pub fn seed_categories() -> Vec<Category> {
    vec![
        category(
            StreamCategory::Gaming,
            "Live gaming streams and gameplay content",
            150_000,
            1_200,
        ),
        category(
            StreamCategory::Music,
            "Live music performances and production",
            75_000,
            500,
        ),
        category(
            StreamCategory::Art,
            "Digital art, illustrations, and creative content",
            45_000,
            300,
        ),
        category(
            StreamCategory::JustChatting,
            "Casual conversations and community interaction",
            200_000,
            2_000,
        ),
    ]
}

/// Five live streams owned by the seed users. `users` must come from
/// [`seed_users`] (or at least contain two streaming accounts first).
pub fn seed_streams(users: &[User]) -> Vec<Stream> {
    vec![
        stream(
            "Late Night Gaming Session",
            "Join me for some competitive gameplay!",
            &users[0],
            1_500,
            120,
            StreamCategory::Gaming,
            &["Gaming", "Competitive"],
        ),
        stream(
            "Live Music Performance",
            "Playing your favorite songs and taking requests",
            &users[1],
            800,
            60,
            StreamCategory::Music,
            &["Music", "Entertainment"],
        ),
        stream(
            "Digital Art Creation",
            "Creating a new character design",
            &users[2],
            500,
            30,
            StreamCategory::Art,
            &["Creative"],
        ),
        stream(
            "Community Chat & Games",
            "Hanging out with the community",
            &users[0],
            2_000,
            45,
            StreamCategory::JustChatting,
            &["Casual", "Entertainment"],
        ),
        stream(
            "Music Production Workshop",
            "Learn the basics of music production",
            &users[1],
            1_200,
            15,
            StreamCategory::Music,
            &["Music", "Educational"],
        ),
    ]
}

fn user(
    username: &str,
    email: &str,
    bio: &str,
    followers: u32,
    following: u32,
    is_streaming: bool,
    (year, month, day): (i32, u32, u32),
) -> User {
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: email.to_string(),
        avatar_url: Some("https://via.placeholder.com/150".to_string()),
        bio: Some(bio.to_string()),
        followers,
        following,
        is_streaming,
        created_at: Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .expect("hardcoded fixture date is invalid - fix source code"),
    }
}

fn category(id: StreamCategory, description: &str, viewer_count: u32, active_streams: u32) -> Category {
    Category {
        id,
        name: id.display_name().to_string(),
        image_url: "https://via.placeholder.com/300".to_string(),
        description: Some(description.to_string()),
        viewer_count,
        active_streams,
    }
}

#[allow(clippy::too_many_arguments)]
fn stream(
    title: &str,
    description: &str,
    streamer: &User,
    viewer_count: u32,
    started_minutes_ago: i64,
    category: StreamCategory,
    tags: &[&str],
) -> Stream {
    Stream {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: Some(description.to_string()),
        thumbnail_url: Some("https://via.placeholder.com/1280x720".to_string()),
        streamer: streamer.clone(),
        viewer_count,
        started_at: Utc::now() - Duration::minutes(started_minutes_ago),
        ended_at: None,
        is_live: true,
        category: Some(category),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    }
}
