//! C source/header generation
//!
//! Renders the decoded samples as a `const int16_t` array plus the
//! `AUDIO_*` macros the ROM code expects. Pure text building, so the
//! exact layout (field widths, trailing commas, include guard) is
//! unit-testable without touching the filesystem.

/// Values per line in the emitted array body.
const SAMPLES_PER_LINE: usize = 16;

/// Parameters shared by the source and header emitters.
#[derive(Debug, Clone, Copy)]
pub struct AudioParams {
    pub sample_rate: u32,
    pub sample_count: usize,
}

impl AudioParams {
    /// Truncated duration in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.sample_count as u64 * 1000 / self.sample_rate as u64
    }
}

fn macro_block(params: &AudioParams) -> String {
    format!(
        "// Audio parameters\n\
         #define AUDIO_SAMPLE_RATE {}\n\
         #define AUDIO_CHANNELS 1\n\
         #define AUDIO_LENGTH {}\n\
         #define AUDIO_DURATION_MS {}\n",
        params.sample_rate,
        params.sample_count,
        params.duration_ms()
    )
}

/// Render the generated .c translation unit.
pub fn render_source(
    input_name: &str,
    array_name: &str,
    params: &AudioParams,
    samples: &[i16],
) -> String {
    let mut out = String::new();
    out.push_str(&format!("// Audio data converted from {input_name}\n"));
    out.push_str("// Generated automatically - do not edit\n\n");
    out.push_str("#include <stdint.h>\n\n");
    out.push_str(&macro_block(params));
    out.push('\n');

    out.push_str(&format!(
        "const int16_t {array_name}[{}] = {{\n",
        samples.len()
    ));
    for (line, chunk) in samples.chunks(SAMPLES_PER_LINE).enumerate() {
        let fields: Vec<String> = chunk.iter().map(|s| format!("{s:6}")).collect();
        out.push_str("    ");
        out.push_str(&fields.join(", "));
        // every line but the one holding the final element gets a comma
        if (line + 1) * SAMPLES_PER_LINE < samples.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("};\n");
    out
}

/// Render the matching include-guarded .h declaration file.
pub fn render_header(
    header_file_name: &str,
    array_name: &str,
    params: &AudioParams,
) -> String {
    let guard = guard_name(header_file_name);
    let mut out = String::new();
    out.push_str(&format!("#ifndef {guard}\n"));
    out.push_str(&format!("#define {guard}\n\n"));
    out.push_str("#include <stdint.h>\n\n");
    out.push_str(&macro_block(params));
    out.push('\n');
    out.push_str(&format!(
        "extern const int16_t {array_name}[{}];\n\n",
        params.sample_count
    ));
    out.push_str(&format!("#endif // {guard}\n"));
    out
}

/// Include guard for a header file name: uppercased, with every
/// non-alphanumeric character mapped to `_` so the guard is always a
/// valid C identifier.
pub fn guard_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_maps_dots_and_hyphens() {
        assert_eq!(guard_name("test_audio_data.h"), "TEST_AUDIO_DATA_H");
        assert_eq!(
            guard_name("intro-mono-22050_data.h"),
            "INTRO_MONO_22050_DATA_H"
        );
    }

    #[test]
    fn duration_truncates() {
        let p = AudioParams {
            sample_rate: 8000,
            sample_count: 4,
        };
        assert_eq!(p.duration_ms(), 0);

        let p = AudioParams {
            sample_rate: 22050,
            sample_count: 193_968,
        };
        assert_eq!(p.duration_ms(), 8796);
    }

    #[test]
    fn source_layout_for_short_array() {
        let params = AudioParams {
            sample_rate: 8000,
            sample_count: 4,
        };
        let src = render_source(
            "test_audio.wav",
            "test_audio",
            &params,
            &[100, -100, 32767, -32768],
        );

        assert!(src.starts_with("// Audio data converted from test_audio.wav\n"));
        assert!(src.contains("#include <stdint.h>\n"));
        assert!(src.contains("#define AUDIO_SAMPLE_RATE 8000\n"));
        assert!(src.contains("#define AUDIO_CHANNELS 1\n"));
        assert!(src.contains("#define AUDIO_LENGTH 4\n"));
        assert!(src.contains("#define AUDIO_DURATION_MS 0\n"));
        // one line of values, right-aligned in 6-char fields, no trailing comma
        assert!(src.contains(
            "const int16_t test_audio[4] = {\n       100,   -100,  32767, -32768\n};\n"
        ));
    }

    #[test]
    fn array_body_wraps_at_sixteen_values() {
        let samples: Vec<i16> = (0..17).collect();
        let params = AudioParams {
            sample_rate: 44100,
            sample_count: samples.len(),
        };
        let src = render_source("x.wav", "audio_data", &params, &samples);

        let body: Vec<&str> = src
            .lines()
            .skip_while(|l| !l.ends_with("= {"))
            .skip(1)
            .take_while(|l| *l != "};")
            .collect();

        assert_eq!(body.len(), 2);
        // full line ends with a comma, the line holding the final element does not
        assert!(body[0].ends_with("    15,"));
        assert_eq!(body[1], "        16");
    }

    #[test]
    fn exactly_sixteen_values_stay_on_one_line_without_comma() {
        let samples: Vec<i16> = (0..16).collect();
        let params = AudioParams {
            sample_rate: 44100,
            sample_count: samples.len(),
        };
        let src = render_source("x.wav", "audio_data", &params, &samples);

        let body: Vec<&str> = src
            .lines()
            .skip_while(|l| !l.ends_with("= {"))
            .skip(1)
            .take_while(|l| *l != "};")
            .collect();

        assert_eq!(body.len(), 1);
        assert!(body[0].ends_with("    15"));
    }

    #[test]
    fn header_declares_extern_array_under_guard() {
        let params = AudioParams {
            sample_rate: 8000,
            sample_count: 4,
        };
        let hdr = render_header("test_audio_data.h", "test_audio", &params);

        assert!(hdr.starts_with("#ifndef TEST_AUDIO_DATA_H\n#define TEST_AUDIO_DATA_H\n"));
        assert!(hdr.contains("#define AUDIO_SAMPLE_RATE 8000\n"));
        assert!(hdr.contains("extern const int16_t test_audio[4];\n"));
        assert!(hdr.ends_with("#endif // TEST_AUDIO_DATA_H\n"));
    }
}
