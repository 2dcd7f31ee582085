pub const BLOCK1_INPUT: &str = r"
- x
- y
";
pub const BLOCK2_INPUT: &str = r"
    - x
    - y
";
pub const BLOCK_EVENTS: &str = r"
+DOC
+SEQ
=VAL :x
=VAL :y
-SEQ
-DOC";
pub const SEQ_PLAIN_INPUT: &str = r"
  - x
   - y
";
pub const SEQ_PLAIN2_INPUT: &str = r"
- x - y
";
pub const SEQ_PLAIN_EVENTS: &str = r"
+DOC
+SEQ
=VAL :x - y
-SEQ
-DOC";
pub const X1_33X3_INPUT: &str = r"
- !!int 1
- !!int -2
";
pub const X1_33X3_EVENTS: &str = r"
+DOC
+SEQ
=VAL <tag:yaml.org,2002:int> :1
=VAL <tag:yaml.org,2002:int> :-2
-SEQ
-DOC";
pub const BLOCK_MAP_INPUT: &str = r"
a: 1
b: 2
";
pub const BLOCK_MAP_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :1
=VAL :b
=VAL :2
-MAP
-DOC";
pub const BLOCK_NESTED_INPUT: &str = r"
outer:
  inner: value
  list:
  - a
  - b
last: end
";
pub const BLOCK_NESTED_EVENTS: &str = r"
+DOC
+MAP
=VAL :outer
+MAP
=VAL :inner
=VAL :value
=VAL :list
+SEQ
=VAL :a
=VAL :b
-SEQ
-MAP
=VAL :last
=VAL :end
-MAP
-DOC";
pub const BLOCK_EMPTY_VALUES_INPUT: &str = r"
a:
b: 
";
pub const BLOCK_EMPTY_VALUES_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :
=VAL :b
=VAL :
-MAP
-DOC";
pub const BLOCK_NESTED_SEQ_INPUT: &str = r"
- - a
  - b
- c
";
pub const BLOCK_NESTED_SEQ_EVENTS: &str = r"
+DOC
+SEQ
+SEQ
=VAL :a
=VAL :b
-SEQ
=VAL :c
-SEQ
-DOC";
pub const BLOCK_MAP_IN_SEQ_INPUT: &str = r"
- name: x
  id: 1
- name: y
";
pub const BLOCK_MAP_IN_SEQ_EVENTS: &str = r"
+DOC
+SEQ
+MAP
=VAL :name
=VAL :x
=VAL :id
=VAL :1
-MAP
+MAP
=VAL :name
=VAL :y
-MAP
-SEQ
-DOC";
pub const BLOCK_COMMENTS_INPUT: &str = r"
# comment
a: 1 # trailing
# between
b: 2
";
pub const BLOCK_MULTI_INPUT: &str = r"
a: first
  second
";
pub const BLOCK_MULTI_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL :first second
-MAP
-DOC";
pub const BLOCK_SCALARS_INPUT: &str = r"
a: |
  line1
  line2
b: >
  folded
  text

  para
c: |-
  strip
d: |+
  keep

";
pub const BLOCK_SCALARS_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
=VAL |line1\nline2\n
=VAL :b
=VAL >folded text\npara\n
=VAL :c
=VAL |strip
=VAL :d
=VAL |keep\n\n
-MAP
-DOC";
pub const LITERAL_INDICATOR_INPUT: &str = r"
- |2
   indented
  text
";
pub const LITERAL_INDICATOR_EVENTS: &str = r"
+DOC
+SEQ
=VAL | indented\ntext\n
-SEQ
-DOC";
pub const BLOCK_ERR_INPUT: &str = r"
  - x
 - y
";
pub const BLOCK_ERR_EVENTS: &str = r"
+DOC
+SEQ
=VAL :x
-SEQ
-DOC
ERR";
pub const WRONG_SEQ_INDENT_INPUT: &str = r"
a:
  - b
 - c
";
pub const WRONG_SEQ_INDENT_EVENTS: &str = r"
+DOC
+MAP
=VAL :a
+SEQ
=VAL :b
-SEQ
ERR";
pub const SIMPLE_KEY_ERR_INPUT: &str = r"
key: value
plain
";
pub const SIMPLE_KEY_ERR_EVENTS: &str = r"
+DOC
+MAP
=VAL :key
=VAL :value
ERR";

pub const FLOW_SEQ_INPUT: &str = r"[a, b, c]";
pub const FLOW_SEQ_TRAILING_INPUT: &str = r"[a, b, c, ]";
pub const FLOW_SEQ_MULTILINE_INPUT: &str = r"
[
  a,
  b,
  c
]
";
pub const FLOW_SEQ_EVENTS: &str = r"
+DOC
+SEQ []
=VAL :a
=VAL :b
=VAL :c
-SEQ
-DOC";
pub const FLOW_MAP_INPUT: &str = r"{a: 1, b: [x, y], c: {d: e}}";
pub const FLOW_MAP_EVENTS: &str = r"
+DOC
+MAP {}
=VAL :a
=VAL :1
=VAL :b
+SEQ []
=VAL :x
=VAL :y
-SEQ
=VAL :c
+MAP {}
=VAL :d
=VAL :e
-MAP
-MAP
-DOC";
pub const FLOW_PAIR_INPUT: &str = r"[a: b, c]";
pub const FLOW_PAIR_EVENTS: &str = r"
+DOC
+SEQ []
+MAP {}
=VAL :a
=VAL :b
-MAP
=VAL :c
-SEQ
-DOC";
pub const FLOW_EMPTY_MAP_INPUT: &str = r"{}";
pub const FLOW_EMPTY_MAP_EVENTS: &str = r"
+DOC
+MAP {}
-MAP
-DOC";
pub const FLOW_EMPTY_SEQ_INPUT: &str = r"[]";
pub const FLOW_EMPTY_SEQ_EVENTS: &str = r"
+DOC
+SEQ []
-SEQ
-DOC";
pub const FLOW_MAP_EMPTY_VALUES_INPUT: &str = r"{a, b: }";
pub const FLOW_MAP_EMPTY_VALUES_EVENTS: &str = r"
+DOC
+MAP {}
=VAL :a
=VAL :
=VAL :b
=VAL :
-MAP
-DOC";
pub const FLOW_IN_BLOCK_INPUT: &str = r"
key: [a, {b: c}]
other: {}
";
pub const FLOW_IN_BLOCK_EVENTS: &str = r"
+DOC
+MAP
=VAL :key
+SEQ []
=VAL :a
+MAP {}
=VAL :b
=VAL :c
-MAP
-SEQ
=VAL :other
+MAP {}
-MAP
-MAP
-DOC";
pub const FLOW_JSON_INPUT: &str = r#"{"a":1, "b":"two"}"#;
pub const FLOW_JSON_EVENTS: &str = r#"
+DOC
+MAP {}
=VAL "a
=VAL :1
=VAL "b
=VAL "two
-MAP
-DOC"#;
pub const FLOW_UNCLOSED_INPUT: &str = r"[a, b";
pub const FLOW_UNCLOSED_EVENTS: &str = r"
+DOC
+SEQ []
=VAL :a
=VAL :b
ERR";

pub const SINGLE_QUOTE_INPUT: &str = r"'single ''quoted'''";
pub const SINGLE_QUOTE_EVENTS: &str = r"
+DOC
=VAL 'single 'quoted'
-DOC";
pub const DOUBLE_ESCAPES_INPUT: &str = r#""esc \t \n \\ \" \x41""#;
pub const DOUBLE_ESCAPES_EVENTS: &str = r#"
+DOC
=VAL "esc \t \n \\ " A
-DOC"#;
pub const DOUBLE_UNICODE_INPUT: &str = r#""é\U0001F600""#;
pub const DOUBLE_UNICODE_EVENTS: &str = "
+DOC
=VAL \"\u{e9}\u{1F600}
-DOC";
pub const DOUBLE_FOLD_INPUT: &str = r#""a
  b

  c""#;
pub const DOUBLE_FOLD_EVENTS: &str = r#"
+DOC
=VAL "a b\nc
-DOC"#;
pub const DOUBLE_ESCAPED_BREAK_INPUT: &str = r#""a\
  b""#;
pub const DOUBLE_ESCAPED_BREAK_EVENTS: &str = r#"
+DOC
=VAL "ab
-DOC"#;
pub const SINGLE_FOLD_INPUT: &str = r"'one
  two'";
pub const SINGLE_FOLD_EVENTS: &str = r"
+DOC
=VAL 'one two
-DOC";
pub const QUOTED_KEYS_INPUT: &str = r#"'k': "v""#;
pub const QUOTED_KEYS_EVENTS: &str = r#"
+DOC
+MAP
=VAL 'k
=VAL "v
-MAP
-DOC"#;
pub const UNKNOWN_ESCAPE_INPUT: &str = r#""\q""#;
pub const UNKNOWN_ESCAPE_EVENTS: &str = r"
ERR";

pub const EMPTY_INPUT: &str = "";
pub const COMMENT_ONLY_INPUT: &str = "# only a comment\n";
pub const EMPTY_EVENTS: &str = r"+STR
-STR";
pub const EXPLICIT_DOC_INPUT: &str = r"---
a
...
";
pub const EXPLICIT_DOC_EVENTS: &str = r"+STR
+DOC ---
=VAL :a
-DOC ...
-STR";
pub const MULTI_DOC_INPUT: &str = r"--- a
--- b
";
pub const MULTI_DOC_EVENTS: &str = r"+STR
+DOC ---
=VAL :a
-DOC
+DOC ---
=VAL :b
-DOC
-STR";
pub const BARE_AFTER_END_INPUT: &str = r"a
...
b
";
pub const BARE_AFTER_END_EVENTS: &str = r"+STR
+DOC
=VAL :a
-DOC ...
+DOC
=VAL :b
-DOC
-STR";
pub const EMPTY_EXPLICIT_DOC_INPUT: &str = "---\n";
pub const EMPTY_EXPLICIT_DOC_EVENTS: &str = r"+STR
+DOC ---
=VAL :
-DOC
-STR";
pub const YAML_DIRECTIVE_INPUT: &str = r"%YAML 1.2
---
x
";
pub const YAML_DIRECTIVE_EVENTS: &str = r"+STR
+DOC ---
=VAL :x
-DOC
-STR";
pub const TAG_DIRECTIVE_INPUT: &str = r"%TAG !e! tag:example.com,2000:app/
---
!e!foo bar
";
pub const TAG_DIRECTIVE_EVENTS: &str = r"+STR
+DOC ---
=VAL <tag:example.com,2000:app/foo> :bar
-DOC
-STR";
pub const UNKNOWN_DIRECTIVE_INPUT: &str = r"%FOO bar baz
--- a
";
pub const UNKNOWN_DIRECTIVE_EVENTS: &str = r"+STR
+DOC ---
=VAL :a
-DOC
-STR";
pub const DUPLICATE_YAML_INPUT: &str = r"%YAML 1.2
%YAML 1.2
---
";
pub const INCOMPATIBLE_YAML_INPUT: &str = r"%YAML 2.0
--- x
";
pub const DUPLICATE_TAG_INPUT: &str = r"%TAG !a! tag:a,2000:
%TAG !a! tag:b,2000:
---
";
pub const DIRECTIVE_ERR_EVENTS: &str = r"+STR
ERR";
pub const ANCHOR_INPUT: &str = r"- &a x
- *a
";
pub const ANCHOR_EVENTS: &str = r"+STR
+DOC
+SEQ
=VAL &a :x
=ALI *a
-SEQ
-DOC
-STR";
pub const UNDEFINED_ALIAS_INPUT: &str = "- *a\n";
pub const UNDEFINED_ALIAS_EVENTS: &str = r"+STR
+DOC
+SEQ
ERR";
pub const UNDEFINED_TAG_HANDLE_INPUT: &str = "!x!y z\n";
pub const UNDEFINED_TAG_HANDLE_EVENTS: &str = r"+STR
+DOC
ERR";

pub const SPEC_EX2_1_INPUT: &str = r"- Mark McGwire
- Sammy Sosa
- Ken Griffey
";
pub const SPEC_EX2_1_EVENTS: &str = r"
+DOC
+SEQ
=VAL :Mark McGwire
=VAL :Sammy Sosa
=VAL :Ken Griffey
-SEQ
-DOC";
pub const SPEC_EX2_2_INPUT: &str = r"hr:  65    # Home runs
avg: 0.278 # Batting average
rbi: 147   # Runs Batted In
";
pub const SPEC_EX2_2_EVENTS: &str = r"
+DOC
+MAP
=VAL :hr
=VAL :65
=VAL :avg
=VAL :0.278
=VAL :rbi
=VAL :147
-MAP
-DOC";
pub const SPEC_EX2_3_INPUT: &str = r"american:
  - Boston Red Sox
  - Detroit Tigers
  - New York Yankees
national:
  - New York Mets
  - Chicago Cubs
  - Atlanta Braves
";
pub const SPEC_EX2_3_EVENTS: &str = r"
+DOC
+MAP
=VAL :american
+SEQ
=VAL :Boston Red Sox
=VAL :Detroit Tigers
=VAL :New York Yankees
-SEQ
=VAL :national
+SEQ
=VAL :New York Mets
=VAL :Chicago Cubs
=VAL :Atlanta Braves
-SEQ
-MAP
-DOC";
pub const SPEC_EX2_4_INPUT: &str = r"-
  name: Mark McGwire
  hr:   65
  avg:  0.278
-
  name: Sammy Sosa
  hr:   63
  avg:  0.288
";
pub const SPEC_EX2_4_EVENTS: &str = r"
+DOC
+SEQ
+MAP
=VAL :name
=VAL :Mark McGwire
=VAL :hr
=VAL :65
=VAL :avg
=VAL :0.278
-MAP
+MAP
=VAL :name
=VAL :Sammy Sosa
=VAL :hr
=VAL :63
=VAL :avg
=VAL :0.288
-MAP
-SEQ
-DOC";
pub const SPEC_EX2_5_INPUT: &str = r"- [name        , hr, avg  ]
- [Mark McGwire, 65, 0.278]
- [Sammy Sosa  , 63, 0.288]
";
pub const SPEC_EX2_5_EVENTS: &str = r"
+DOC
+SEQ
+SEQ []
=VAL :name
=VAL :hr
=VAL :avg
-SEQ
+SEQ []
=VAL :Mark McGwire
=VAL :65
=VAL :0.278
-SEQ
+SEQ []
=VAL :Sammy Sosa
=VAL :63
=VAL :0.288
-SEQ
-SEQ
-DOC";
pub const SPEC_EX2_6_INPUT: &str = r"Mark McGwire: {hr: 65, avg: 0.278}
Sammy Sosa: {
    hr: 63,
    avg: 0.288
  }
";
pub const SPEC_EX2_6_EVENTS: &str = r"
+DOC
+MAP
=VAL :Mark McGwire
+MAP {}
=VAL :hr
=VAL :65
=VAL :avg
=VAL :0.278
-MAP
=VAL :Sammy Sosa
+MAP {}
=VAL :hr
=VAL :63
=VAL :avg
=VAL :0.288
-MAP
-MAP
-DOC";
pub const SPEC_EX2_7_INPUT: &str = r"# Ranking of 1998 home runs
---
- Mark McGwire
- Sammy Sosa
- Ken Griffey

# Team ranking
---
- Chicago Cubs
- St Louis Cardinals
";
pub const SPEC_EX2_7_EVENTS: &str = r"
+DOC ---
+SEQ
=VAL :Mark McGwire
=VAL :Sammy Sosa
=VAL :Ken Griffey
-SEQ
-DOC
+DOC ---
+SEQ
=VAL :Chicago Cubs
=VAL :St Louis Cardinals
-SEQ
-DOC";
pub const SPEC_EX2_8_INPUT: &str = r"---
time: 20:03:20
player: Sammy Sosa
action: strike (miss)
...
---
time: 20:03:47
player: Sammy Sosa
action: grand slam
...
";
pub const SPEC_EX2_8_EVENTS: &str = r"
+DOC ---
+MAP
=VAL :time
=VAL :20:03:20
=VAL :player
=VAL :Sammy Sosa
=VAL :action
=VAL :strike (miss)
-MAP
-DOC ...
+DOC ---
+MAP
=VAL :time
=VAL :20:03:47
=VAL :player
=VAL :Sammy Sosa
=VAL :action
=VAL :grand slam
-MAP
-DOC ...";
pub const SPEC_EX2_9_INPUT: &str = r"---
hr: # 1998 hr ranking
  - Mark McGwire
  - Sammy Sosa
rbi:
  # 1998 rbi ranking
  - Sammy Sosa
  - Ken Griffey
";
pub const SPEC_EX2_9_EVENTS: &str = r"
+DOC ---
+MAP
=VAL :hr
+SEQ
=VAL :Mark McGwire
=VAL :Sammy Sosa
-SEQ
=VAL :rbi
+SEQ
=VAL :Sammy Sosa
=VAL :Ken Griffey
-SEQ
-MAP
-DOC";
pub const SPEC_EX2_10_INPUT: &str = r"---
hr:
  - Mark McGwire
  # Following node labeled SS
  - &SS Sammy Sosa
rbi:
  - *SS # Subsequent occurrence
  - Ken Griffey
";
pub const SPEC_EX2_10_EVENTS: &str = r"
+DOC ---
+MAP
=VAL :hr
+SEQ
=VAL :Mark McGwire
=VAL &SS :Sammy Sosa
-SEQ
=VAL :rbi
+SEQ
=ALI *SS
=VAL :Ken Griffey
-SEQ
-MAP
-DOC";
pub const SPEC_EX2_13_INPUT: &str = r"# ASCII Art
--- |
  \//||\/||
  // ||  ||__
";
pub const SPEC_EX2_13_EVENTS: &str = r"
+DOC ---
=VAL |\\//||\\/||\n// ||  ||__\n
-DOC";
pub const SPEC_EX2_14_INPUT: &str = r"--- >
  Mark McGwire's
  year was crippled
  by a knee injury.
";
pub const SPEC_EX2_14_EVENTS: &str = r"
+DOC ---
=VAL >Mark McGwire's year was crippled by a knee injury.\n
-DOC";
pub const SPEC_EX2_17_INPUT: &str = r#"unicode: "Sosa did fine.☺"
control: "\b1998\t1999\t2000\n"
hex esc: "\x0d\x0a is \r\n"

single: '"Howdy!" he cried.'
quoted: ' # Not a ''comment''.'
tie-fighter: '|\-*-/|'
"#;
pub const SPEC_EX2_17_EVENTS: &str = "
+DOC
+MAP
=VAL :unicode
=VAL \"Sosa did fine.\u{263A}
=VAL :control
=VAL \"\\b1998\\t1999\\t2000\\n
=VAL :hex esc
=VAL \"\\r\\n is \\r\\n
=VAL :single
=VAL '\"Howdy!\" he cried.
=VAL :quoted
=VAL ' # Not a 'comment'.
=VAL :tie-fighter
=VAL '|\\\\-*-/|
-MAP
-DOC";
pub const SPEC_EX2_18_INPUT: &str = r#"plain:
  This unquoted scalar
  spans many lines.

quoted: "So does this
  quoted scalar.\n"
"#;
pub const SPEC_EX2_18_EVENTS: &str = r#"
+DOC
+MAP
=VAL :plain
=VAL :This unquoted scalar spans many lines.
=VAL :quoted
=VAL "So does this quoted scalar.\n
-MAP
-DOC"#;
pub const SPEC_EX2_23_INPUT: &str = r"---
not-date: !!str 2002-04-28

picture: !!binary |
 R0lGODlhDAAMAIQAAP//9/X
 17unp5WZmZgAAAOfn515eXv

application specific tag: !something |
 The semantics of the tag
 above may be different for
 different documents.
";
pub const SPEC_EX2_23_EVENTS: &str = r"
+DOC ---
+MAP
=VAL :not-date
=VAL <tag:yaml.org,2002:str> :2002-04-28
=VAL :picture
=VAL <tag:yaml.org,2002:binary> |R0lGODlhDAAMAIQAAP//9/X\n17unp5WZmZgAAAOfn515eXv\n
=VAL :application specific tag
=VAL <!something> |The semantics of the tag\nabove may be different for\ndifferent documents.\n
-MAP
-DOC";
pub const SPEC_EX2_24_INPUT: &str = r"%TAG ! tag:clarkevans.com,2002:
--- !shape
  # Use the ! handle for presenting
  # tag:clarkevans.com,2002:circle
- !circle
  center: &ORIGIN {x: 73, y: 129}
  radius: 7
";
pub const SPEC_EX2_24_EVENTS: &str = r"
+DOC ---
+SEQ <tag:clarkevans.com,2002:shape>
+MAP <tag:clarkevans.com,2002:circle>
=VAL :center
+MAP {} &ORIGIN
=VAL :x
=VAL :73
=VAL :y
=VAL :129
-MAP
=VAL :radius
=VAL :7
-MAP
-SEQ
-DOC";
pub const SPEC_EX5_3_INPUT: &str = r"sequence:
- one
- two
mapping:
  ? sky
  : blue
  sea : green
";
pub const SPEC_EX5_3_EVENTS: &str = r"
+DOC
+MAP
=VAL :sequence
+SEQ
=VAL :one
=VAL :two
-SEQ
=VAL :mapping
+MAP
=VAL :sky
=VAL :blue
=VAL :sea
=VAL :green
-MAP
-MAP
-DOC";
pub const SPEC_EX5_4_INPUT: &str = r"sequence: [ one, two, ]
mapping: { sky: blue, sea: green }
";
pub const SPEC_EX5_4_EVENTS: &str = r"
+DOC
+MAP
=VAL :sequence
+SEQ []
=VAL :one
=VAL :two
-SEQ
=VAL :mapping
+MAP {}
=VAL :sky
=VAL :blue
=VAL :sea
=VAL :green
-MAP
-MAP
-DOC";
pub const SPEC_EX7_4_INPUT: &str = r#""implicit block key" : [
  "implicit flow key" : value,
 ]
"#;
pub const SPEC_EX7_4_EVENTS: &str = r#"
+DOC
+MAP
=VAL "implicit block key
+SEQ []
+MAP {}
=VAL "implicit flow key
=VAL :value
-MAP
-SEQ
-MAP
-DOC"#;
pub const SPEC_EX8_1_INPUT: &str = r"- | # Empty header
 literal
- >1 # Indentation indicator
  folded
- |+ # Chomping indicator
 keep

- >1- # Both indicators
  strip
";
pub const SPEC_EX8_1_EVENTS: &str = r"
+DOC
+SEQ
=VAL |literal\n
=VAL > folded\n
=VAL |keep\n\n
=VAL > strip
-SEQ
-DOC";

pub const SPEC_EX8_4_INPUT: &str = r"strip: |-
  text
clip: |
  text
keep: |+
  text
";
pub const SPEC_EX8_4_EVENTS: &str = r"
+DOC
+MAP
=VAL :strip
=VAL |text
=VAL :clip
=VAL |text\n
=VAL :keep
=VAL |text\n
-MAP
-DOC";

// whitespace-only lines are spelled out
pub const SPEC_EX8_5_INPUT: &str = concat!(
    " # Strip\n",
    "  # Comments:\n",
    "strip: |-\n",
    "  # text\n",
    "  \n",
    " # Clip\n",
    "  # comments:\n",
    "\n",
    "clip: |\n",
    "  # text\n",
    " \n",
    " # Keep\n",
    "  # comments:\n",
    "\n",
    "keep: |+\n",
    "  # text\n",
    "\n",
    " # Trail\n",
    "  # comments.\n",
);
pub const SPEC_EX8_5_EVENTS: &str = r"
+DOC
+MAP
=VAL :strip
=VAL |# text
=VAL :clip
=VAL |# text\n
=VAL :keep
=VAL |# text\n\n
-MAP
-DOC";

pub const SPEC_EX8_6_INPUT: &str = r"strip: >-

clip: >

keep: |+

";
pub const SPEC_EX8_6_EVENTS: &str = r"
+DOC
+MAP
=VAL :strip
=VAL >
=VAL :clip
=VAL >
=VAL :keep
=VAL |\n
-MAP
-DOC";
