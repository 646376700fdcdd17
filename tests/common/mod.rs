#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A report with every section populated and two suites.
pub fn sample_report_json() -> String {
    r#"{
  "nightly": {
    "metadata": {
      "build": "42",
      "ci_url": "https://ci.example.com/job/42",
      "date": "2021-06-01",
      "branch": "master"
    },
    "target": {
      "platform": "FVP_Base_RevC",
      "version": "11.14"
    },
    "test-config": {
      "test-assets": {
        "fip": { "url": "https://artifacts.example.com/fip.bin", "sha": "abc123" },
        "rootfs": { "format": "ext4" }
      }
    },
    "test-environments": {
      "lava": { "device": "fvp", "job": "https://lava.example.com/scheduler/job/1" }
    },
    "test-suites": {
      "ltp": {
        "metadata": { "owner": "qa" },
        "test-results": {
          "r1": { "status": "PASS", "metadata": { "duration": "1s" } },
          "r2": { "status": "FAIL", "metadata": { "duration": "3s" } },
          "r3": { "status": "SKIP", "metadata": { "duration": "0s" } }
        }
      },
      "optee-test": {
        "metadata": {},
        "test-results": {
          "t1": { "status": "PASS", "metadata": { "description": "xtest 1001" } }
        }
      }
    }
  }
}"#
    .to_string()
}

/// One suite, `r1` passing and `r2` failing.
pub fn two_result_report_json() -> String {
    r#"{
  "smoke": {
    "metadata": {},
    "target": {},
    "test-config": { "test-assets": {} },
    "test-environments": {},
    "test-suites": {
      "suite-a": {
        "metadata": { "runner": "ptest" },
        "test-results": {
          "r1": { "status": "PASS", "metadata": { "id": "1" } },
          "r2": { "status": "FAIL", "metadata": { "id": "2" } }
        }
      }
    }
  }
}"#
    .to_string()
}

/// The same shape as the sample report, in YAML.
pub fn sample_report_yaml() -> String {
    r#"nightly:
  metadata:
    build: "42"
    branch: master
  target:
    platform: FVP_Base_RevC
  test-config:
    test-assets:
      fip:
        sha: abc123
  test-environments:
    lava:
      device: fvp
  test-suites:
    ltp:
      metadata:
        owner: qa
      test-results:
        r1:
          status: PASS
          metadata:
            duration: 1s
        r2:
          status: FAIL
          metadata:
            duration: 3s
"#
    .to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A fresh path under the system temp dir.
pub fn temp_path(name: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("report-html-tests-{}-{}", std::process::id(), n));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}
