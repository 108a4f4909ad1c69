/// Replaces `{0}`, `{1}`, ... in `template` with the matching entry of `args`.
///
/// Arguments are inserted verbatim and never rescanned, so rendered operands
/// that themselves contain braces are safe. Placeholders without a matching
/// argument, and braces that do not form a placeholder, are kept literally.
pub fn format_message(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let substituted = tail.find('}').and_then(|close| {
            let index: usize = tail[..close].parse().ok()?;
            args.get(index).map(|arg| (arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn fills_placeholders_in_any_order() {
        let message = format_message("Expected {1} to be included in {0}", &args(&["[1]", "2"]));
        assert_eq!(message, "Expected 2 to be included in [1]");
    }

    #[test]
    fn unmatched_braces_stay_literal() {
        assert_eq!(
            format_message("{x} {3} {0", &args(&["a"])),
            "{x} {3} {0"
        );
    }

    #[test]
    fn inserted_arguments_are_not_rescanned() {
        assert_eq!(
            format_message("{0} vs {1}", &args(&["\"{1}\"", "b"])),
            "\"{1}\" vs b"
        );
    }
}
