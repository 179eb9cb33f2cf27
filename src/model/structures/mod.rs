pub mod game_record;
pub mod outcome;
pub mod player_rating;
pub mod rating_update;
