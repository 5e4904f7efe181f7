mod common;

mod tests {
    use myrtio_led_strip::color::Rgb;
    use myrtio_led_strip::command::{ResultCode, decode_params, set_leds};
    use myrtio_led_strip::{LedError, LedStrip, LedStripConfig, StripError};

    use crate::common::{Event, RecordingTransmitter};

    fn strip() -> LedStrip<RecordingTransmitter> {
        LedStrip::new(RecordingTransmitter::new(), &LedStripConfig::default()).unwrap()
    }

    #[test]
    fn test_set_leds_writes_and_flushes() {
        let mut strip = strip();
        set_leds(&mut strip, &[0, 255, 0b111_000_00]).unwrap();

        assert_eq!(strip.pixels().get(1), Some(Rgb::new(255, 255, 255)));
        assert_eq!(strip.pixels().get(2), Some(Rgb::new(255, 0, 0)));
        assert_eq!(
            strip.transmitter().last_frame(),
            Some(&[0, 0, 0, 255, 255, 255, 0, 255, 0][..])
        );
    }

    #[test]
    fn test_empty_command_fails_without_changes() {
        let mut strip = strip();
        let before = strip.pixels().committed_bytes(256).to_vec();
        let events = strip.transmitter().events.len();

        assert_eq!(
            set_leds(&mut strip, &[]),
            Err(StripError::Led(LedError::EmptyInput))
        );
        assert_eq!(strip.pixels().committed_bytes(256), before);
        assert_eq!(strip.pixels().active_count(), 4);
        assert_eq!(strip.transmitter().events.len(), events);
    }

    #[test]
    fn test_invalid_value_writes_nothing() {
        let mut strip = strip();
        let result = set_leds(&mut strip, &[255, 255, 256, 255]);
        assert_eq!(
            result,
            Err(StripError::Led(LedError::InvalidValue {
                position: 2,
                value: 256
            }))
        );
        assert_eq!(strip.pixels().get(0), Some(Rgb::new(0, 0, 0)));
        assert_eq!(strip.transmitter().events, [Event::Start(0)]);

        assert_eq!(
            set_leds(&mut strip, &[-1]),
            Err(StripError::Led(LedError::InvalidValue {
                position: 0,
                value: -1
            }))
        );
    }

    #[test]
    fn test_extra_params_are_ignored() {
        let params = [255; 10];
        let colors = decode_params::<4>(&params).unwrap();
        assert_eq!(colors.len(), 4);

        let mut strip =
            LedStrip::<_, 4>::new(RecordingTransmitter::new(), &LedStripConfig::default()).unwrap();
        set_leds(&mut strip, &params).unwrap();
        assert_eq!(strip.transmitter().last_frame(), Some(&[255; 12][..]));
    }

    #[test]
    fn test_result_code() {
        let mut strip = strip();
        assert_eq!(ResultCode::from(set_leds(&mut strip, &[1, 2])), ResultCode::Ok);
        assert_eq!(ResultCode::from(set_leds(&mut strip, &[])), ResultCode::Error);
        assert_eq!(ResultCode::from(set_leds(&mut strip, &[300])), ResultCode::Error);
    }
}
