use quizpair_game::GameService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: quizpair_db::DbPool,
    /// Pair-game engine shared with the timeout sweeper.
    pub games: GameService,
}
