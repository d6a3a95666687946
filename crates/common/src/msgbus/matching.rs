// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Wildcard pattern matching for hierarchical topics.

use ustr::Ustr;

/// Matches a `topic` against a string `pattern` which may contain wildcards:
///
/// - `*` matches zero or more characters.
/// - `?` matches exactly one character.
/// - Any other character matches itself.
///
/// The match is anchored over the full topic, byte-oriented and case-sensitive.
#[must_use]
pub fn is_matching(topic: &Ustr, pattern: &Ustr) -> bool {
    is_matching_bytes(topic.as_bytes(), pattern.as_bytes())
}

/// Matches topic bytes against pattern bytes using iterative backtracking.
///
/// Backtracking only occurs on `*` wildcards, so matching runs in linear time
/// for patterns without asterisks and requires no recursion or length cap.
#[must_use]
pub fn is_matching_bytes(topic: &[u8], pattern: &[u8]) -> bool {
    // Stack of states to resume from when the current path fails (topic_idx, pattern_idx)
    let mut stack = vec![(0_usize, 0_usize)];

    while let Some((mut i, mut j)) = stack.pop() {
        loop {
            // Matched if both strings are fully consumed
            if i == topic.len() && j == pattern.len() {
                return true;
            }

            if j == pattern.len() {
                break;
            }

            if pattern[j] == b'*' {
                // Try skipping the '*' first; fall back to consuming one topic
                // byte while keeping the '*' active
                stack.push((i, j + 1));

                if i < topic.len() {
                    i += 1;
                    continue;
                }
                break;
            } else if i < topic.len() && (pattern[j] == b'?' || topic[i] == pattern[j]) {
                i += 1;
                j += 1;
                continue;
            }

            break;
        }
    }

    false
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("*", "*", true)]
    #[case("a", "*", true)]
    #[case("a", "a", true)]
    #[case("a", "b", false)]
    #[case("data.quotes.BTCUSDT", "data.*", true)]
    #[case("data.quotes.BTCUSDT", "data.quotes*", true)]
    #[case("data.quotes.BTCUSDT", "data.*.BTCUSDT", true)]
    #[case("data.trades.BTCUSDT", "data.*.ETHUSDT", false)]
    #[case("events.order.S-001", "events.order.*", true)]
    #[case("events.position.S-001", "events.order.*", false)]
    // Standard glob examples
    #[case("comp", "comp*", true)]
    #[case("complete", "comp*", true)]
    #[case("computer", "comp*", true)]
    #[case("camp", "c?mp", true)]
    #[case("comp", "c?mp", true)]
    #[case("cmp", "c?mp", false)]
    #[case("champ", "c?mp", false)]
    #[case("cp", "c*p", true)]
    #[case("comp", "c*p", true)]
    #[case("clamp", "c*p", true)]
    // Case sensitivity and anchoring
    #[case("Comp", "comp*", false)]
    #[case("comp.extra", "comp", false)]
    #[case("", "*", true)]
    #[case("", "?", false)]
    #[case("", "", true)]
    fn test_is_matching(#[case] topic: &str, #[case] pattern: &str, #[case] expected: bool) {
        assert_eq!(
            is_matching(&Ustr::from(topic), &Ustr::from(pattern)),
            expected,
        );
    }

    #[rstest]
    fn test_multiple_asterisks() {
        assert!(is_matching_bytes(b"data.quotes.EURUSD.SIM", b"data.*.EURUSD.*"));
        assert!(is_matching_bytes(b"abcxyzdef", b"a*x?z*f"));
        assert!(!is_matching_bytes(b"abcxyzde", b"a*x?z*f"));
    }

    #[rstest]
    fn test_long_topic_no_length_cap() {
        let topic = "a".repeat(4096);
        assert!(is_matching_bytes(topic.as_bytes(), b"a*"));
        assert!(!is_matching_bytes(topic.as_bytes(), b"b*"));
    }
}
