//! Page fixtures shaped like the site's embedded record store

#![allow(dead_code)]

use ratemyprof_core::{ClientConfig, RmpScraper};
use serde_json::{Value, json};
use wiremock::MockServer;

pub fn scraper_for(server: &MockServer) -> RmpScraper {
    RmpScraper::with_config(ClientConfig::with_base_url(server.uri()))
        .expect("scraper should build")
}

pub fn school_key(id: u64) -> String {
    format!("School-{}", id)
}

fn keyed(key: &str, record: &str) -> String {
    format!("{}:{}", Value::String(key.to_string()), record)
}

pub fn school_record(id: u64, name: &str) -> String {
    let key = school_key(id);
    let record = format!(
        r#"{{"__id":{key},"__typename":"School","legacyId":{id},"name":{name},"city":"Cleveland","state":"OH"}}"#,
        key = Value::String(key.clone()),
        id = id,
        name = Value::String(name.to_string()),
    );
    keyed(&key, &record)
}

pub fn teacher_record(id: u64, first: &str, last: &str, num_ratings: u32, school_id: u64) -> String {
    let key = format!("Teacher-{}", id);
    let record = json!({
        "__id": key,
        "__typename": "Teacher",
        "legacyId": id,
        "firstName": first,
        "lastName": last,
        "department": "Mathematics",
        "avgRatingRounded": 4.2,
        "avgDifficultyRounded": 2.8,
        "wouldTakeAgainPercentRounded": 75,
        "numRatings": num_ratings,
        "school": {"__ref": school_key(school_id)},
    });
    keyed(&key, &record.to_string())
}

pub fn profile_teacher_record(id: u64, first: &str, last: &str, num_ratings: u32, school_id: u64) -> String {
    let key = format!("Teacher-{}", id);
    let record = json!({
        "__id": key,
        "__typename": "Teacher",
        "legacyId": id,
        "firstName": first,
        "lastName": last,
        "department": "Mathematics",
        "avgRating": 4.23,
        "avgDifficulty": 2.79,
        "wouldTakeAgainPercent": 75.5,
        "numRatings": num_ratings,
        "school": {"__ref": school_key(school_id)},
    });
    keyed(&key, &record.to_string())
}

pub fn rating_record(id: u64, class: &str, comment: &str) -> String {
    let key = format!("Rating-{}", id);
    let record = json!({
        "__id": key,
        "__typename": "Rating",
        "legacyId": id,
        "class": class,
        "comment": comment,
        "date": "2024-01-15 10:00:00 +0000 UTC",
        "clarityRating": 4,
        "helpfulRating": 5,
        "difficultyRating": 3,
        "grade": "B+",
        "wouldTakeAgain": 1,
        "attendanceMandatory": "mandatory",
        "isForCredit": true,
        "isForOnlineClass": false,
        "thumbsUpTotal": 2,
        "thumbsDownTotal": 1,
    });
    keyed(&key, &record.to_string())
}

pub fn relay_page(records: &[String]) -> String {
    let mut store = vec![r#""client:root":{"__id":"client:root","__typename":"__Root"}"#.to_string()];
    store.extend(records.iter().cloned());
    format!(
        "<!DOCTYPE html><html><head><style>body {{ margin: 0 }}</style></head><body>\
         <div id=\"root\"></div>\
         <script>window.__RELAY_STORE__ = {{{}}};</script>\
         </body></html>",
        store.join(",")
    )
}

pub fn school_search_page(schools: &[(u64, &str)]) -> String {
    let records: Vec<String> = schools
        .iter()
        .map(|(id, name)| school_record(*id, name))
        .collect();
    relay_page(&records)
}

pub fn school_profile_page(id: u64, name: &str) -> String {
    relay_page(&[school_record(id, name)])
}

/// Professors as (id, first, last, num_ratings)
pub fn professor_search_page(school: (u64, &str), professors: &[(u64, &str, &str, u32)]) -> String {
    let mut records: Vec<String> = professors
        .iter()
        .map(|(id, first, last, n)| teacher_record(*id, first, last, *n, school.0))
        .collect();
    records.push(school_record(school.0, school.1));
    relay_page(&records)
}

pub fn professor_profile_page(
    id: u64,
    first: &str,
    last: &str,
    num_ratings: u32,
    school: (u64, &str),
    ratings: &[(u64, &str, &str)],
) -> String {
    let mut records = vec![
        profile_teacher_record(id, first, last, num_ratings, school.0),
        school_record(school.0, school.1),
    ];
    records.extend(
        ratings
            .iter()
            .map(|(rid, class, comment)| rating_record(*rid, class, comment)),
    );
    relay_page(&records)
}

pub fn empty_search_page() -> String {
    relay_page(&[])
}
