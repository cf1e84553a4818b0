use super::*;
use crate::app::action::Action;
use crate::app::bus::NotificationEvent;
use crate::app::command::Command;
use crate::app::state::AppState;
use crate::domain::meeting::MockMeetingFacade;
use crate::domain::models::{MeetingId, MeetingInfo};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

fn meeting(id: &str) -> MeetingInfo {
    MeetingInfo {
        id: MeetingId(id.to_string()),
        description: "Instant Meeting".to_string(),
        starts_at: chrono::Local::now(),
    }
}

#[tokio::test]
async fn test_handle_command_error_reaches_island() {
    let mut mock = MockMeetingFacade::new();
    mock.expect_start_instant_meeting()
        .returning(|| Err(anyhow::anyhow!("backend offline")));

    let (tx, mut rx) = mpsc::channel(1);
    let mut state = AppState::default();

    handle_command(Command::StartInstantMeeting, Arc::new(mock), tx).unwrap();

    let action = rx.recv().await.unwrap();
    if let Action::MeetingStarted(Err(msg)) = &action {
        assert!(msg.contains("backend offline"));
    } else {
        panic!("Expected Action::MeetingStarted(Err), got {action:?}");
    }

    crate::app::reducer::update(&mut state, action);
    assert_eq!(
        state.island.visible().map(|e| e.label().to_string()),
        Some("Failed to create Meeting".to_string())
    );
}

#[tokio::test]
async fn test_microphone_toggle_round_trip() {
    let mut mock = MockMeetingFacade::new();
    mock.expect_toggle_microphone().times(1).returning(|| Ok(false));
    let facade: Arc<dyn MeetingFacade> = Arc::new(mock);

    let mut state = AppState::default();
    crate::app::reducer::update(&mut state, Action::MeetingStarted(Ok(meeting("abc"))));

    let (tx, mut rx) = mpsc::channel(1);
    let command = crate::app::reducer::update(&mut state, Action::ToggleMicrophone);
    assert_eq!(command, Some(Command::ToggleMicrophone));
    handle_command(command.unwrap(), facade, tx).unwrap();

    let action = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action);

    match state.hud.visible() {
        Some(NotificationEvent::Hud(hud)) => {
            assert_eq!(hud.label, "Microphone Off");
            assert_eq!(hud.active, Some(false));
        }
        other => panic!("Expected HUD, got {other:?}"),
    }
}

#[tokio::test]
async fn test_toggle_failure_shows_nothing() {
    let mut mock = MockMeetingFacade::new();
    mock.expect_toggle_camera()
        .returning(|| Err(anyhow::anyhow!("camera busy")));

    let mut state = AppState::default();
    crate::app::reducer::update(&mut state, Action::MeetingStarted(Ok(meeting("abc"))));
    state.hud.dismiss();

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::ToggleCamera, Arc::new(mock), tx).unwrap();
    let action = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action);

    assert!(state.hud.visible().is_none());
}

#[tokio::test]
async fn test_loop_quits_on_ctrl_c() {
    let mut mock = MockMeetingFacade::new();
    mock.expect_call_events()
        .returning(|| broadcast::channel(1).1);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(4);
    event_tx
        .send(Ok(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ))))
        .await
        .unwrap();

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        run_loop_with_events(&mut terminal, AppState::default(), Arc::new(mock), event_rx),
    )
    .await;

    assert!(matches!(result, Ok(Ok(()))));
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockMeetingFacade::new();
    // Every backend call succeeds so the fuzzer can wander into a call and back out
    let (call_tx, _) = broadcast::channel(16);
    let call_events = call_tx.clone();
    mock.expect_call_events()
        .returning(move || call_events.subscribe());
    mock.expect_toggle_microphone().returning(|| Ok(false));
    mock.expect_toggle_camera().returning(|| Ok(true));
    mock.expect_start_instant_meeting()
        .returning(|| Ok(meeting("fuzz")));
    mock.expect_join_meeting()
        .returning(|id| Ok(meeting(&id.0)));
    mock.expect_schedule_meeting()
        .returning(|desc| {
            let mut info = meeting("later");
            info.description = desc.to_string();
            Ok(info)
        });
    mock.expect_leave_meeting().returning(|| Ok(()));
    mock.expect_sign_out().returning(|| Ok(()));

    let adapter = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for i in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            if i % 500 == 0 {
                let _ = call_tx.send(crate::domain::models::CallEvent::ParticipantJoined(
                    "Ada".to_string(),
                ));
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Send Quit
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, adapter, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }
    if rng.gen_bool(0.05) {
        modifiers.insert(KeyModifiers::SUPER);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
