pub mod game_common;
pub mod hunt_scene;
pub mod results_scene;
pub mod setup_scene;
pub mod stage_form;
mod stats_panel;

use crate::game::{Game, Phase};
use ratatui::Frame;
use setup_scene::SetupScreen;
use stage_form::StageForm;

/// Draw whichever screen matches the game phase. Reads state only.
pub fn draw_ui(frame: &mut Frame, game: &Game, setup: &SetupScreen, form: &StageForm) {
    let area = frame.size();

    match game.phase {
        Phase::Setup => setup.draw(frame, area, game),
        Phase::Play => hunt_scene::render_hunt(frame, area, game, form),
        Phase::End => results_scene::render_results(frame, area, game),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{update, GameEvent};
    use crate::hunt::{Action, PathChoice};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(game: &Game, setup: &SetupScreen, form: &StageForm) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| draw_ui(frame, game, setup, form))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_every_phase_renders_the_same_twice() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut game = Game::default();
        let setup = SetupScreen::new();
        let form = StageForm::new();

        assert_eq!(render(&game, &setup, &form), render(&game, &setup, &form));

        update(&mut game, GameEvent::AddPlayer("Ava".into()), &mut rng);
        update(&mut game, GameEvent::StartGame, &mut rng);
        update(
            &mut game,
            GameEvent::Submit(Action::Path(PathChoice::SwampTrail)),
            &mut rng,
        );
        let play = render(&game, &setup, &form);
        assert_eq!(play, render(&game, &setup, &form));
        assert!(buffer_text(&play).contains("Ava's Turn"));
        assert!(!buffer_text(&play).contains("[Esc]"));
    }

    #[test]
    fn test_setup_screen_explains_skipped_names() {
        let mut setup = SetupScreen::new();
        setup.names[0] = "Ava!".to_string();
        setup.focused = 1;

        let text = buffer_text(&render(&Game::default(), &setup, &StageForm::new()));
        assert!(text.contains("Player 1: '!' is not allowed in a name"));
    }

    #[test]
    fn test_results_screen_names_winner() {
        let mut game = Game::default();
        let mut p = crate::hunt::Player::new("Ava");
        p.stage = crate::hunt::Stage::Done;
        p.complete = true;
        game.players.push(p);
        game.phase = crate::game::Phase::End;
        crate::game::finalize_game(&mut game);

        let text = buffer_text(&render(&game, &SetupScreen::new(), &StageForm::new()));
        assert!(text.contains("The winner is Ava"));
    }
}
