use serde::Serialize;

use roma_core::detect::LanguageModel;

#[derive(Debug, Serialize)]
struct Ranked {
    language: String,
    probability: f64,
}

/// Print every language with its probability, most probable first.
pub fn detect_cmd(text: &str, languages: &[String], json: bool) {
    let model = die!(
        LanguageModel::from_profiles(languages),
        "Error building language model: {}"
    );
    let mut detector = model.detector();
    detector.append(text);
    let ranked = die!(detector.probabilities(), "Error: {}");

    if json {
        let rows: Vec<Ranked> = ranked
            .into_iter()
            .map(|(language, probability)| Ranked {
                language,
                probability,
            })
            .collect();
        let out = die!(serde_json::to_string_pretty(&rows), "Error: {}");
        println!("{out}");
        return;
    }

    let best = detector.detect();
    for (language, probability) in &ranked {
        println!("{language:<8} {probability:.6}");
    }
    match best {
        Ok(language) => eprintln!("detected: {language}"),
        Err(e) => eprintln!("detected: none ({e})"),
    }
}
