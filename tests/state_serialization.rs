use nine_knights::{
    parse_point, GamePhase, GameState, GridCoordinate, Player, PROTOCOL_VERSION,
};
use nine_knights::protocol::Message;
use serde_json::json;

fn p(label: &str) -> GridCoordinate {
    parse_point(label).expect("test uses valid point labels")
}

/// A mid-game state with a pending capture: the Knight just completed the
/// outer top row.
fn capture_pending_state() -> GameState {
    let mut state = GameState::new();
    for label in ["a7", "b2", "d7", "f2", "g7"] {
        assert!(state.place_token(p(label)));
    }
    assert!(state.is_capturing_piece());
    state
}

#[test]
fn snapshot_uses_the_persisted_field_names() {
    let value = serde_json::to_value(capture_pending_state()).unwrap();
    for key in [
        "turn",
        "phase",
        "tokens",
        "winner",
        "tokensPlaced",
        "millTokens",
        "currentMill",
        "lastMove",
        "isKnightTurn",
    ] {
        assert!(value.get(key).is_some(), "missing field {}", key);
    }
    assert_eq!(value["phase"], json!("placement"));
    assert_eq!(value["tokensPlaced"], json!(5));
    assert_eq!(value["isKnightTurn"], json!(true));
    assert_eq!(value["currentMill"].as_array().unwrap().len(), 3);
    assert_eq!(
        value["lastMove"],
        json!({"placed": {"at": {"x": "max", "y": "max", "layer": "outer"}}})
    );
}

#[test]
fn payload_roundtrip_reproduces_the_state_exactly() {
    let state = capture_pending_state();
    let payload = state.to_payload().unwrap();
    assert_eq!(GameState::from_payload(&payload), state);

    let fresh = GameState::new();
    assert_eq!(
        GameState::from_payload(&fresh.to_payload().unwrap()),
        fresh
    );
}

#[test]
fn corrupt_or_empty_payload_falls_back_to_a_fresh_state() {
    assert_eq!(GameState::from_payload(b"not json at all"), GameState::new());
    assert_eq!(GameState::from_payload(b""), GameState::new());
    assert_eq!(
        GameState::from_payload(br#"{"turn": "fifteen"}"#),
        GameState::new()
    );
}

#[test]
fn turn_messages_roundtrip_through_bincode() {
    let payload = capture_pending_state().to_payload().unwrap();
    let msg = Message::TakeTurn {
        version: PROTOCOL_VERSION,
        seq: 12,
        payload: payload.clone(),
    };
    let bytes = bincode::serialize(&msg).unwrap();
    let decoded: Message = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, msg);

    match decoded {
        Message::TakeTurn { payload: body, .. } => {
            assert_eq!(GameState::from_payload(&body), capture_pending_state());
        }
        other => panic!("expected TakeTurn, got {:?}", other),
    }
}

fn tok(player: &str, x: &str, y: &str, layer: &str) -> serde_json::Value {
    json!({"player": player, "coord": {"x": x, "y": y, "layer": layer}})
}

/// Both outer files belong to the Knight, so every Knight token is
/// mill-protected: the Troll's fresh mill has no legal target and the
/// caller must advance past the capture window.
#[test]
fn decoded_state_skips_capture_when_every_target_is_protected() {
    let knights = [
        tok("knight", "min", "min", "outer"), // a1
        tok("knight", "min", "mid", "outer"), // a4
        tok("knight", "min", "max", "outer"), // a7
        tok("knight", "max", "min", "outer"), // g1
        tok("knight", "max", "mid", "outer"), // g4
        tok("knight", "max", "max", "outer"), // g7
    ];
    let troll_mill = [
        tok("troll", "min", "min", "middle"), // b2
        tok("troll", "mid", "min", "middle"), // d2
        tok("troll", "max", "min", "middle"), // f2
    ];
    let mut tokens: Vec<serde_json::Value> = knights.to_vec();
    tokens.extend(troll_mill.to_vec());
    tokens.push(tok("troll", "min", "max", "middle")); // b6

    let mut mill_tokens: Vec<serde_json::Value> = knights.to_vec();
    mill_tokens.extend(troll_mill.to_vec());

    let value = json!({
        "turn": 40,
        "phase": "movement",
        "tokens": tokens,
        "winner": null,
        "tokensPlaced": 18,
        "millTokens": mill_tokens,
        "currentMill": troll_mill.to_vec(),
        "lastMove": {"moved": {
            "start": {"x": "max", "y": "mid", "layer": "middle"},
            "end": {"x": "max", "y": "min", "layer": "middle"},
        }},
        "isKnightTurn": false,
    });
    let mut state = GameState::from_payload(value.to_string().as_bytes());

    assert_eq!(state.phase(), GamePhase::Movement);
    assert!(state.is_capturing_piece());
    assert_eq!(state.current_player(), Player::Troll);
    assert!(state.removable_tokens(Player::Knight).is_empty());
    assert!(!state.remove_token(p("a1")));

    // The documented fallback: skip the capture by advancing directly.
    state.advance();
    assert!(!state.is_capturing_piece());
    assert_eq!(state.turn(), 41);
    assert_eq!(state.current_player(), Player::Knight);
    assert_eq!(state.winner(), None);
}

/// At exactly 3 live tokens mill protection lapses: the same capture that
/// a fourth token would have blocked now succeeds, and losing the third
/// ends the game.
#[test]
fn decoded_state_allows_mill_capture_at_exactly_three() {
    let knight_mill = [
        tok("knight", "min", "min", "outer"), // a1
        tok("knight", "min", "mid", "outer"), // a4
        tok("knight", "min", "max", "outer"), // a7
    ];
    let troll_mill = [
        tok("troll", "min", "min", "middle"), // b2
        tok("troll", "mid", "min", "middle"), // d2
        tok("troll", "max", "min", "middle"), // f2
    ];
    let mut tokens: Vec<serde_json::Value> = knight_mill.to_vec();
    tokens.push(tok("knight", "max", "min", "outer")); // g1
    tokens.extend(troll_mill.to_vec());

    let mut mill_tokens: Vec<serde_json::Value> = knight_mill.to_vec();
    mill_tokens.extend(troll_mill.to_vec());

    let value = json!({
        "turn": 33,
        "phase": "movement",
        "tokens": tokens,
        "winner": null,
        "tokensPlaced": 18,
        "millTokens": mill_tokens,
        "currentMill": knight_mill.to_vec(),
        "lastMove": {"moved": {
            "start": {"x": "min", "y": "mid", "layer": "middle"},
            "end": {"x": "min", "y": "mid", "layer": "outer"},
        }},
        "isKnightTurn": true,
    });
    let mut state = GameState::from_payload(value.to_string().as_bytes());

    assert!(state.is_capturing_piece());
    let removable = state.removable_tokens(Player::Troll);
    assert_eq!(removable.len(), 3);

    assert!(state.remove_token(p("b2")));
    assert_eq!(state.token_count(Player::Troll), 2);
    assert_eq!(state.winner(), Some(Player::Knight));
    assert_eq!(state.turn(), 34);
}
