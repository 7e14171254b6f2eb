use serde_json::json;

use crate::common::{TestApp, csv, routes};

/// Two producers over fifteen consecutive years, wins at 2000, 2002, 2006 and 2009.
async fn spawn_alternating_producers() -> TestApp {
    let app = TestApp::spawn().await;
    let producer1 = app.insert_producer("Test Producer").await;
    let producer2 = app.insert_producer("Test Producer 2").await;
    let studio1 = app.insert_studio("Test Studio").await;
    let studio2 = app.insert_studio("Test Studio 2").await;

    for i in 0..15 {
        let winner = [0, 2, 6, 9].contains(&i);
        let (producer, studio) = if i % 2 == 0 {
            (producer1, studio1)
        } else {
            (producer2, studio2)
        };
        app.insert_movie(&format!("Movie {i}"), 2000 + i, winner, &[producer], &[studio])
            .await;
    }
    app
}

#[tokio::test]
async fn reports_smallest_and_largest_gap() {
    let app = spawn_alternating_producers().await;

    let res = app.get(routes::AWARDS_INTERVAL).await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["min"][0]["interval"], 2);
    assert_eq!(res.body["max"][0]["interval"], 4);
    for list in ["min", "max"] {
        let entry = res.body[list][0].as_object().unwrap();
        for field in ["producer", "interval", "previousWin", "followingWin"] {
            assert!(entry.contains_key(field), "{list} is missing {field}");
        }
    }
}

#[tokio::test]
async fn gaps_come_from_a_loaded_nominee_list() {
    let app = TestApp::spawn_with_csv(&csv(&[
        "2000;First;Studio X;Producer A;yes",
        "2001;Loser;Studio X;Producer B;",
        "2002;Second;Studio X;Producer A;yes",
        "2006;Third;Studio Y;Producer A;yes",
        "2007;Another Loser;Studio Y;Producer B;no",
        "2009;Fourth;Studio Y;Producer A;yes",
    ]))
    .await;

    let res = app.get(routes::AWARDS_INTERVAL).await;

    assert_eq!(res.status, 200);
    assert_eq!(
        res.body,
        json!({
            "min": [{"producer": "Producer A", "interval": 2, "previousWin": 2000, "followingWin": 2002}],
            "max": [{"producer": "Producer A", "interval": 4, "previousWin": 2002, "followingWin": 2006}],
        })
    );
}

#[tokio::test]
async fn split_producer_names_each_count() {
    let app = TestApp::spawn_with_csv(&csv(&[
        "1990;One;S;Joel Silver, Lawrence Gordon;yes",
        "1991;Two;S;Joel Silver;yes",
        "2000;Three;S;Matthew Vaughn and Lawrence Gordon;yes",
    ]))
    .await;

    let res = app.get(routes::AWARDS_INTERVAL).await;

    assert_eq!(
        res.body["min"],
        json!([{"producer": "Joel Silver", "interval": 1, "previousWin": 1990, "followingWin": 1991}])
    );
    assert_eq!(
        res.body["max"],
        json!([{"producer": "Lawrence Gordon", "interval": 10, "previousWin": 1990, "followingWin": 2000}])
    );
}

#[tokio::test]
async fn tied_producers_are_all_reported() {
    let app = TestApp::spawn_with_csv(&csv(&[
        "1980;A1;S;Producer One;yes",
        "1985;A2;S;Producer One;yes",
        "1990;B1;S;Producer Two;yes",
        "1995;B2;S;Producer Two;yes",
    ]))
    .await;

    let res = app.get(routes::AWARDS_INTERVAL).await;

    let producers = |list: &str| -> Vec<String> {
        res.body[list]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["producer"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(producers("min"), vec!["Producer One", "Producer Two"]);
    assert_eq!(producers("max"), vec!["Producer One", "Producer Two"]);
}

#[tokio::test]
async fn same_year_twice_gives_zero_interval() {
    let app = TestApp::spawn_with_csv(&csv(&[
        "1984;Bolero;S;Bo Derek;yes",
        "1984;Also Bolero;S;Bo Derek;yes",
        "1990;Ghosts Can't Do It;S;Bo Derek;yes",
    ]))
    .await;

    let res = app.get(routes::AWARDS_INTERVAL).await;

    assert_eq!(res.body["min"][0]["interval"], 0);
    assert_eq!(res.body["min"][0]["previousWin"], 1984);
    assert_eq!(res.body["min"][0]["followingWin"], 1984);
    assert_eq!(res.body["max"][0]["interval"], 6);
}

#[tokio::test]
async fn no_repeat_winner_gives_empty_lists() {
    let app = TestApp::spawn_with_csv(&csv(&[
        "1980;A;S;Producer One;yes",
        "1981;B;S;Producer Two;yes",
        "1982;C;S;Producer One;",
    ]))
    .await;

    let res = app.get(routes::AWARDS_INTERVAL).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!({"min": [], "max": []}));
}

#[tokio::test]
async fn empty_database_gives_empty_lists() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::AWARDS_INTERVAL).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!({"min": [], "max": []}));
}

#[tokio::test]
async fn repeated_requests_agree() {
    let app = spawn_alternating_producers().await;

    let first = app.get(routes::AWARDS_INTERVAL).await;
    let second = app.get(routes::AWARDS_INTERVAL).await;

    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn wins_are_grouped_per_producer_regardless_of_insert_order() {
    let app = TestApp::spawn().await;
    let early = app.insert_producer("Early Producer").await;
    let late = app.insert_producer("Late Producer").await;
    let studio = app.insert_studio("Test Studio").await;

    // Movies are inserted newest first and interleave both producers.
    for (title, year, producer) in [
        ("Movie A", 2010, late),
        ("Movie B", 2008, early),
        ("Movie C", 2001, late),
        ("Movie D", 2007, early),
        ("Movie E", 1990, late),
    ] {
        app.insert_movie(title, year, true, &[producer], &[studio])
            .await;
    }

    let res = app.get(routes::AWARDS_INTERVAL).await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(
        res.body,
        json!({
            "min": [{"producer": "Early Producer", "interval": 1, "previousWin": 2007, "followingWin": 2008}],
            "max": [{"producer": "Late Producer", "interval": 11, "previousWin": 1990, "followingWin": 2001}],
        })
    );
}

#[tokio::test]
async fn many_winning_producers_are_all_counted() {
    // More distinct producers than SQLite accepts as bound parameters in one statement.
    let rows: Vec<String> = (0..1200)
        .flat_map(|i| {
            [
                format!("1990;First {i};Studio;Producer {i};yes"),
                format!("{};Second {i};Studio;Producer {i};yes", 1991 + i % 2),
            ]
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let app = TestApp::spawn_with_csv(&csv(&rows)).await;

    let res = app.get(routes::AWARDS_INTERVAL).await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["min"].as_array().unwrap().len(), 600);
    assert_eq!(res.body["max"].as_array().unwrap().len(), 600);
    assert_eq!(res.body["min"][0]["producer"], "Producer 0");
    assert_eq!(res.body["max"][0]["producer"], "Producer 1");
    assert_eq!(res.body["max"][0]["interval"], 2);
}
