use crate::core::{ConversionResult, LINE_WIDTH};

/// text writer for Mozzi table headers
pub struct Writer {
    buffer: String,
}

impl Writer {
    /// new writer
    pub fn new() -> Self {
        Writer {
            buffer: String::new(),
        }
    }

    /// write a complete header for a converted table
    pub fn write(mut self, result: &ConversionResult) -> String {
        let meta = &result.metadata;
        let name = &meta.name;

        // guard
        self.line(&format!("#ifndef {name}_H_"));
        self.line(&format!("#define {name}_H_"));
        self.line("");

        // includes
        self.line("#include <Arduino.h>");
        self.line("#include \"mozzi_pgmspace.h\"");
        self.line("");

        // macros, cell count is post-dither
        self.line(&format!("#define {name}_NUM_CELLS {}", result.values.len()));
        self.line(&format!("#define {name}_SAMPLERATE {}", meta.sample_rate));
        self.line("");

        // table
        let table = Self::table_literal(result);
        self.buffer.push_str(&fill(&table, LINE_WIDTH));
        self.line("");
        self.line("");

        self.line(&format!("#endif /* {name}_H_ */"));

        self.buffer
    }

    /// the array declaration on a single line
    fn table_literal(result: &ConversionResult) -> String {
        let values = result
            .values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "CONSTTABLE_STORAGE({}) {}_DATA [] = {{{}}};",
            result.metadata.output_bits.c_type(),
            result.metadata.name,
            values
        )
    }

    fn line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy word wrap at `width` columns.
///
/// Words are separated by spaces. A word longer than `width` is broken so it
/// fills whatever room is left on the current line.
pub fn fill(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word = word;

        loop {
            let len = line.chars().count();
            let word_len = word.chars().count();

            if line.is_empty() && word_len <= width {
                line.push_str(word);
                break;
            }
            if !line.is_empty() && len + 1 + word_len <= width {
                line.push(' ');
                line.push_str(word);
                break;
            }
            if word_len <= width {
                lines.push(std::mem::take(&mut line));
                continue;
            }

            // long word: fill the rest of this line with its head
            let room = if line.is_empty() {
                width
            } else {
                width.saturating_sub(len + 1)
            };
            if room > 0 {
                let split = char_boundary(word, room);
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&word[..split]);
                word = &word[split..];
            }
            lines.push(std::mem::take(&mut line));
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

/// byte offset of the `n`th char
fn char_boundary(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}
