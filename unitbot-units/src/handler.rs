//! The `@convert` chat handler

use tracing::debug;
use unitbot_core::{BotError, Message, Reply};
use unitbot_plugin::{HandlerMeta, MessageHandler};
use crate::convert::{convert_request, Conversion, ConversionRequest};
use crate::help::{HELP_MESSAGE, QUICK_HELP, USAGE};
use crate::ConvertError;

/// Token that starts a conversion command
pub const TRIGGER: &str = "@convert";

/// Outcome of one `@convert` occurrence in a message
#[derive(Debug, Clone, PartialEq)]
pub enum Occurrence {
    Help,
    Converted(Conversion),
    Failed(Vec<ConvertError>),
}

impl Occurrence {
    /// Reply lines for this occurrence, without ordinal labels
    pub fn lines(&self) -> Vec<String> {
        match self {
            Occurrence::Help => vec![HELP_MESSAGE.to_string()],
            Occurrence::Converted(conversion) => vec![conversion.to_string()],
            Occurrence::Failed(errors) => errors
                .iter()
                .map(|e| BotError::from(e).reply_line())
                .collect(),
        }
    }
}

/// Find every `@convert` occurrence in `content` and evaluate it.
///
/// Content is lowercased and split on whitespace. Tokens following one
/// occurrence are not consumed away from the next, so each literal
/// `@convert` token yields exactly one outcome.
pub fn parse_commands(content: &str) -> Vec<Occurrence> {
    let lowered = content.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    words
        .iter()
        .enumerate()
        .filter(|(_, word)| **word == TRIGGER)
        .map(|(i, _)| {
            let occurrence = match &words[i + 1..] {
                ["help", ..] => Occurrence::Help,
                [number, unit_from, unit_to, ..] => {
                    let request = ConversionRequest {
                        number: *number,
                        unit_from: *unit_from,
                        unit_to: *unit_to,
                    };
                    match convert_request(&request) {
                        Ok(conversion) => Occurrence::Converted(conversion),
                        Err(errors) => Occurrence::Failed(errors),
                    }
                }
                _ => Occurrence::Failed(vec![ConvertError::TooFewArguments]),
            };
            debug!(index = i, ?occurrence, "parsed @convert occurrence");
            occurrence
        })
        .collect()
}

/// Join occurrence lines into reply content, one line each.
///
/// With more than one occurrence every line is labelled with its 1-based
/// position in the reply, counting across all occurrences.
pub fn render_reply(occurrences: &[Occurrence]) -> String {
    let labelled = occurrences.len() > 1;
    let mut content = String::new();

    let lines = occurrences.iter().flat_map(Occurrence::lines);
    for (idx, line) in lines.enumerate() {
        if labelled {
            content.push_str(&format!("{}. conversion: ", idx + 1));
        }
        content.push_str(&line);
        content.push('\n');
    }

    content
}

/// Converts quantities between units on `@convert` commands
pub struct ConverterHandler;

static CONVERTER_EXAMPLES: [&str; 4] = [
    "@convert 12 celsius fahrenheit",
    "@convert 0.002 kilomile millimeter",
    "@convert 31.5 square-mile ha",
    "@convert 56 g lb",
];

impl MessageHandler for ConverterHandler {
    fn meta(&self) -> HandlerMeta {
        HandlerMeta {
            name: "converter",
            description: "Convert a number between two units of measurement",
            usage: USAGE,
            trigger: TRIGGER,
            examples: &CONVERTER_EXAMPLES,
        }
    }

    fn triage(&self, message: &Message) -> bool {
        message.content.contains(TRIGGER)
    }

    fn handle(&self, message: &Message) -> Reply {
        let occurrences = parse_commands(&message.content);

        // Triage matched a substring but no standalone token
        let content = if occurrences.is_empty() {
            format!("{}\n", QUICK_HELP)
        } else {
            render_reply(&occurrences)
        };

        Reply::to_stream(message, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(content: &str) -> Reply {
        ConverterHandler.handle(&Message::new(content, "general", "units"))
    }

    #[test]
    fn test_triage() {
        let handler = ConverterHandler;
        assert!(handler.triage(&Message::new("please @convert 1 m cm", "s", "t")));
        assert!(handler.triage(&Message::new("@convert,", "s", "t")));
        assert!(!handler.triage(&Message::new("convert 1 m cm", "s", "t")));
    }

    #[test]
    fn test_single_conversion_unlabelled() {
        let reply = handle("What is @convert 12 celsius fahrenheit in the oven?");
        assert_eq!(reply.content, "12.0 celsius = 53.6 fahrenheit\n");
        assert_eq!(reply.to, "general");
        assert_eq!(reply.subject, "units");
    }

    #[test]
    fn test_multiple_occurrences_labelled() {
        let reply = handle("@convert 1 m cm @convert 2 kg lb");
        assert_eq!(
            reply.content,
            "1. conversion: 1.0 m = 100.0 cm\n2. conversion: 2.0 kg = 4.4092452 lb\n"
        );
    }

    #[test]
    fn test_content_is_lowercased() {
        let reply = handle("@CONVERT 1 KB bit");
        // triage is case-sensitive, handling is not
        assert!(!ConverterHandler.triage(&Message::new("@CONVERT 1 KB bit", "s", "t")));
        assert_eq!(reply.content, format!("kb is not a valid unit. {}\n", QUICK_HELP));
    }

    #[test]
    fn test_help_ignores_following_tokens() {
        let occurrences = parse_commands("@convert help 12 celsius fahrenheit");
        assert_eq!(occurrences, vec![Occurrence::Help]);
        assert_eq!(handle("@convert help").content, format!("{}\n", HELP_MESSAGE));
    }

    #[test]
    fn test_lone_trigger_is_too_few_arguments() {
        let reply = handle("@convert");
        assert_eq!(reply.content, format!("Too few arguments given. {}\n", QUICK_HELP));

        let occurrences = parse_commands("@convert 1 m");
        assert_eq!(occurrences, vec![Occurrence::Failed(vec![ConvertError::TooFewArguments])]);
    }

    #[test]
    fn test_errors_do_not_stop_other_occurrences() {
        let reply = handle("@convert x m cm @convert 1 m g @convert 1 km m");
        let lines: Vec<&str> = reply.content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("1. conversion: x is not a valid number. {}", QUICK_HELP));
        assert_eq!(
            lines[1],
            format!("2. conversion: Gram and meter are not from the same category. {}", QUICK_HELP)
        );
        assert_eq!(lines[2], "3. conversion: 1.0 km = 1000.0 m");
    }

    #[test]
    fn test_labels_count_every_line() {
        let reply = handle("@convert 1 foo bar @convert 1 m cm");
        assert_eq!(
            reply.content,
            format!(
                "1. conversion: foo is not a valid unit. {q}\n\
                 2. conversion: bar is not a valid unit. {q}\n\
                 3. conversion: 1.0 m = 100.0 cm\n",
                q = QUICK_HELP
            )
        );
    }

    #[test]
    fn test_single_occurrence_with_two_errors_unlabelled() {
        let reply = handle("@convert 1 foo bar");
        let lines: Vec<&str> = reply.content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("foo is not a valid unit."));
        assert!(lines[1].starts_with("bar is not a valid unit."));
    }

    #[test]
    fn test_substring_without_token_points_to_help() {
        let reply = handle("@converter 1 m cm");
        assert_eq!(reply.content, format!("{}\n", QUICK_HELP));
    }

    #[test]
    fn test_meta() {
        let meta = ConverterHandler.meta();
        assert_eq!(meta.name, "converter");
        assert_eq!(meta.trigger, "@convert");
        assert_eq!(meta.examples.len(), 4);
    }
}
