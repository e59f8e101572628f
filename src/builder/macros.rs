//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a literal
/// description. States keep the order in which they are written.
///
/// # Example
///
/// ```
/// use undo_fsm::machine_config;
///
/// let config = machine_config! {
///     initial: "draft",
///     states: {
///         "draft" => { "submit" => "review" },
///         "review" => { "approve" => "published", "reject" => "draft" },
///         "published" => {},
///     }
/// };
///
/// assert_eq!(config.initial, "draft");
/// assert_eq!(config.target("review", "reject"), Some("draft"));
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => {
                    $( $event:expr => $target:expr ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::core::StateTable::new();
        $(
            states.insert(
                $state,
                $crate::core::StateDefinition::new() $( .on($event, $target) )*,
            );
        )*
        $crate::core::MachineConfig::new($initial, states)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn machine_config_macro_builds_table() {
        let config = machine_config! {
            initial: "green",
            states: {
                "green" => { "next" => "yellow" },
                "yellow" => { "next" => "red" },
                "red" => { "next" => "green" },
            }
        };

        assert_eq!(config.initial, "green");
        assert_eq!(
            config.states.names().collect::<Vec<_>>(),
            vec!["green", "yellow", "red"]
        );
        assert_eq!(config.target("red", "next"), Some("green"));
    }

    #[test]
    fn machine_config_supports_empty_states() {
        let config = machine_config! {
            initial: "only",
            states: {
                "only" => {}
            }
        };

        assert_eq!(config.states.len(), 1);
        assert!(config.states.get("only").unwrap().transitions.is_empty());
    }

    #[test]
    fn machine_config_accepts_expressions() {
        let start = String::from("a");
        let config = machine_config! {
            initial: start.clone(),
            states: {
                start.as_str() => { "go" => "b" },
                "b" => {},
            },
        };

        assert_eq!(config.target("a", "go"), Some("b"));
    }
}
