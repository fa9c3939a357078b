//! Tests for the pulse timing codec

mod common;

use common::*;
use voltas_lib::constants::{BIT_MARK_US, CARRIER_HZ, DEFAULT_DUTY_PERCENT, DEFAULT_MESSAGE_GAP_US};
use voltas_lib::pulse::parse_timings;

#[test]
fn test_decode_real_capture() {
    let decoded = decode_voltas(&CAPTURED_TIMINGS, 0, STATE_BITS, true).expect("Failed to decode capture");
    assert_eq!(decoded.bits, STATE_BITS);
    assert_eq!(decoded.state.as_bytes(), &hex_to_state(CAPTURED_STATE));
    assert_eq!(
        decoded.state.to_string(),
        "Power: On, Mode: 4 (Dry), Temp: 24C, Fan: 4 (High), Turbo: Off, Econo: Off, WiFi: On, Light: Off"
    );
}

#[test]
fn test_decode_at_offset() {
    let mut raw = vec![9000, 4500];
    raw.extend_from_slice(&CAPTURED_TIMINGS);
    let decoded = decode_voltas(&raw, 2, STATE_BITS, true).unwrap();
    assert_eq!(decoded.state.as_bytes(), &hex_to_state(CAPTURED_STATE));
    assert!(decode_voltas(&raw, 0, STATE_BITS, true).is_err());
}

#[test]
fn test_synthetic_round_trip() {
    let mut ac = recording_remote();
    ac.set_raw(&hex_to_state(CAPTURED_STATE)).unwrap();
    ac.send(0);
    let rec = ac.into_transmitter();
    assert_eq!(rec.carrier_hz(), CARRIER_HZ);
    assert_eq!(rec.duty_percent(), DEFAULT_DUTY_PERCENT);
    assert_eq!(rec.timings().len(), STATE_BITS as usize * 2 + 2);
    assert_eq!(rec.timings()[STATE_BITS as usize * 2], BIT_MARK_US);
    assert_eq!(*rec.timings().last().unwrap(), DEFAULT_MESSAGE_GAP_US);

    let decoded = decode_voltas(rec.timings(), 0, STATE_BITS, true).unwrap();
    assert_eq!(decoded.state.as_bytes(), &hex_to_state(CAPTURED_STATE));
}

#[test]
fn test_round_trip_of_many_states() {
    let mut ac = recording_remote();
    for temp in [16, 21, 30] {
        for mode in [Mode::Fan, Mode::Heat, Mode::Dry, Mode::Cool] {
            for fan in [FanSpeed::Low, FanSpeed::Med, FanSpeed::High, FanSpeed::Auto] {
                let state = ac.state_mut();
                state.set_temp(temp);
                state.set_mode(mode);
                state.set_fan(fan);
                state.set_turbo(temp == 21);
                state.set_off_timer(temp as u16 * 30);
                let expected = ac.raw();

                let mut rec = PulseRecorder::new();
                voltas_lib::send_voltas(&mut rec, &expected, 0, true);
                let decoded = decode_voltas(rec.timings(), 0, STATE_BITS, true).unwrap();
                assert_eq!(decoded.state.as_bytes(), &expected);
            }
        }
    }
}

#[test]
fn test_send_repeat_produces_copies() {
    let mut ac = recording_remote();
    ac.state_mut().on();
    ac.send(2);
    let rec = ac.into_transmitter();
    let message = STATE_BITS as usize * 2 + 2;
    assert_eq!(rec.timings().len(), 3 * message);
    assert_eq!(rec.timings()[..message], rec.timings()[message..2 * message]);
    assert_eq!(rec.timings()[..message], rec.timings()[2 * message..]);
}

#[test]
fn test_send_without_modulation() {
    let config = TransmitConfig {
        use_modulation: false,
        ..TransmitConfig::new(4)
    };
    let mut ac = Voltas::new(config.clone(), PulseRecorder::new());
    ac.begin();
    ac.send(0);
    let rec = ac.into_transmitter();
    assert_eq!(rec.carrier_hz(), 0);
    assert_eq!(rec.config(), Some(&config));
}

#[test]
fn test_parsed_text_timings_decode() {
    let text = CAPTURED_TIMINGS
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let raw = parse_timings(&format!("{{{}}}", text)).unwrap();
    assert_eq!(raw, CAPTURED_TIMINGS.to_vec());
    assert!(decode_voltas(&raw, 0, STATE_BITS, true).is_ok());
}
