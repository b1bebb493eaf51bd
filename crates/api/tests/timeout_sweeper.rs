//! Tests for the background timeout sweeper loop.

mod common;

use std::sync::Arc;
use std::time::Duration;

use quizpair_api::background::timeout_sweeper;
use quizpair_core::clock::ManualClock;
use quizpair_core::rules::GameSettings;
use quizpair_game::GameService;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

#[sqlx::test(migrations = "../../db/migrations")]
async fn sweeper_finishes_stalled_game_and_stops_on_cancel(pool: PgPool) {
    common::seed_questions(&pool, 5).await;
    let clock = Arc::new(ManualClock::at_epoch());
    let games = GameService::new(pool.clone(), clock.clone(), GameSettings::default());

    games.connect("alice").await.unwrap();
    clock.advance(chrono::Duration::seconds(1));
    let game = games.connect("bob").await.unwrap();
    for _ in 0..5 {
        games.submit_answer("alice", "wrong").await.unwrap();
    }
    clock.advance(chrono::Duration::seconds(11));

    let cancel = CancellationToken::new();
    let handle = tokio::spawn(timeout_sweeper::run(
        games.clone(),
        Duration::from_millis(20),
        cancel.clone(),
    ));

    let mut finished = false;
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        if games.game_by_id("bob", game.id).await.unwrap().status == "Finished" {
            finished = true;
            break;
        }
    }

    cancel.cancel();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("sweeper did not stop")
        .unwrap();

    assert!(finished, "stalled game was not finished");
    let game = games.game_by_id("alice", game.id).await.unwrap();
    assert_eq!(game.second_player_progress.unwrap().answers.len(), 5);
}
