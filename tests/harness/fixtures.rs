//! Contents of the sample data directory.

pub(crate) const CONFIG: &str = r##"{
  "storage": {
    "input": {
      "tables": [
        {
          "source": "in.c-main.test",
          "destination": "sample.csv",
          "columns": [],
          "where_values": [],
          "where_operator": "eq"
        },
        {
          "source": "in.c-main.test2",
          "destination": "fooBar.csv",
          "columns": [],
          "where_values": [],
          "where_operator": "eq"
        }
      ],
      "files": [
        { "tags": ["dilbert"], "processed_tags": [], "filter_by_run_id": false }
      ]
    },
    "output": {
      "tables": [
        { "source": "results.csv", "destination": "out.c-main.test" },
        { "source": "results-new.csv", "destination": "out.c-main.test-new" }
      ],
      "files": [
        {
          "source": "processed.png",
          "tags": ["processed-file"],
          "is_public": false,
          "is_permanent": true
        }
      ]
    }
  },
  "parameters": {
    "fooBar": { "foo": 42, "bar": 24 },
    "baz": "bazBar"
  },
  "image_parameters": {},
  "action": "test",
  "authorization": {
    "oauth_api": {
      "id": "123456",
      "credentials": {
        "id": "main",
        "authorizedFor": "Myself",
        "creator": { "id": "1234", "description": "me@keboola.com" },
        "created": "2016-01-31 00:13:30",
        "#data": "{\"mykey\":\"myval\"}",
        "oauthVersion": "2.0",
        "appKey": "myappkey",
        "#appSecret": "myappsecret"
      }
    }
  }
}"##;

/// Input files as (name, manifest). Listed out of order on purpose.
pub(crate) const INPUT_FILES: [(&str, &str); 5] = [
    (
        "151971405_21702.strip.print.gif",
        r#"{"id": 151971405, "name": "21702.strip.print.gif", "tags": ["dilbert"],
            "is_public": false, "size_bytes": 4931}"#,
    ),
    (
        "151971455_21704.strip.print.gif",
        r#"{"id": 151971455, "name": "21704.strip.print.gif", "tags": ["dilbert"]}"#,
    ),
    (
        "151971425_21703.strip.print.gif",
        r#"{"id": 151971425, "name": "21703.strip.print.gif", "tags": ["dilbert"]}"#,
    ),
    (
        "151971505_21706.strip.print.gif",
        r#"{"id": 151971505, "name": "21706.strip.print.gif", "tags": ["dilbert"]}"#,
    ),
    (
        "151971475_21705.strip.print.gif",
        r#"{"id": 151971475, "name": "21705.strip.print.gif", "tags": ["dilbert"]}"#,
    ),
];

pub(crate) const SAMPLE_COLUMNS: [&str; 13] = [
    "x", "Sales", "CompPrice", "Income", "Advertising", "Population", "Price", "ShelveLoc", "Age",
    "Education", "Urban", "US", "High",
];
