use super::Rule;

pub(super) fn standard_rules() -> Vec<Rule> {
    vec![
        // Respiratory
        Rule::new(
            "Flu (Influenza)",
            ["fever", "high fever", "cough", "sore throat", "fatigue", "body aches", "chills"],
            "Rest, drink fluids, take antiviral medications if prescribed. Avoid contact with others.",
        ),
        Rule::new(
            "Common Cold",
            ["sneezing", "runny nose", "sore throat", "nasal congestion", "mild fever"],
            "Rest, stay hydrated, use over-the-counter cold medications.",
        ),
        Rule::new(
            "COVID-19",
            [
                "fever",
                "dry cough",
                "loss of taste",
                "loss of smell",
                "fatigue",
                "breathing difficulty",
                "body aches",
            ],
            "Isolate immediately, wear a mask, consult healthcare provider. Monitor oxygen levels.",
        ),
        Rule::new(
            "Pneumonia",
            ["high fever", "productive cough", "chest pain", "shortness of breath", "fatigue", "chills"],
            "Seek medical attention immediately. May require antibiotics or hospitalization.",
        ),
        Rule::new(
            "Bronchitis",
            ["cough", "productive cough", "chest tightness", "fatigue", "mild fever", "sore throat"],
            "Rest, drink fluids, use humidifier. Avoid smoking and air pollutants.",
        ),
        Rule::new(
            "Asthma",
            ["wheezing", "shortness of breath", "chest tightness", "cough", "breathing difficulty"],
            "Use prescribed inhalers, avoid triggers, have an action plan ready.",
        ),
        Rule::new(
            "Tuberculosis",
            ["cough", "productive cough", "night sweats", "weight loss", "fatigue", "fever", "chest pain"],
            "Requires long-term antibiotic treatment. Highly contagious - isolate and seek medical care.",
        ),
        // Neurological
        Rule::new(
            "Migraine",
            [
                "severe headache",
                "throbbing headache",
                "nausea",
                "sensitivity to light",
                "sensitivity to sound",
                "vomiting",
            ],
            "Rest in a dark, quiet room. Take prescribed medications. Stay hydrated.",
        ),
        Rule::new(
            "Tension Headache",
            ["headache", "fatigue", "muscle pain", "difficulty sleeping"],
            "Over-the-counter pain relievers, stress management, adequate sleep.",
        ),
        Rule::new(
            "Vertigo",
            ["dizziness", "vertigo", "nausea", "vomiting", "hearing loss", "ringing in ears"],
            "Sit or lie down immediately. Avoid sudden movements. See ENT specialist.",
        ),
        // Gastrointestinal
        Rule::new(
            "Gastroenteritis",
            ["nausea", "vomiting", "diarrhea", "abdominal pain", "fever", "stomach cramps"],
            "Stay hydrated, eat bland foods, rest. Seek care if symptoms persist over 48 hours.",
        ),
        Rule::new(
            "Food Poisoning",
            ["nausea", "vomiting", "diarrhea", "abdominal pain", "fever", "weakness"],
            "Stay hydrated, rest. Seek medical care if severe vomiting or bloody stools.",
        ),
        Rule::new(
            "Acid Reflux (GERD)",
            ["heartburn", "chest pain", "difficulty swallowing", "nausea", "bloating"],
            "Avoid trigger foods, eat smaller meals, don't lie down after eating.",
        ),
        // Infectious
        Rule::new(
            "Malaria",
            ["high fever", "chills", "sweating", "headache", "nausea", "vomiting", "body aches"],
            "Seek immediate medical treatment. Antimalarial drugs required.",
        ),
        Rule::new(
            "Dengue Fever",
            ["high fever", "severe headache", "joint pain", "muscle pain", "rash", "fatigue", "nausea"],
            "No specific treatment. Rest, hydrate, take pain relievers (avoid aspirin).",
        ),
        Rule::new(
            "Typhoid",
            [
                "high fever",
                "headache",
                "abdominal pain",
                "weakness",
                "loss of appetite",
                "diarrhea",
                "constipation",
            ],
            "Antibiotics required. Hospitalization may be necessary for severe cases.",
        ),
        Rule::new(
            "Chickenpox",
            ["rash", "blisters", "fever", "fatigue", "itchy skin", "headache", "loss of appetite"],
            "Calamine lotion for itching, antihistamines, stay hydrated. Isolate from others.",
        ),
        // Allergies and skin
        Rule::new(
            "Allergic Rhinitis",
            ["sneezing", "runny nose", "nasal congestion", "itchy eyes", "watery eyes"],
            "Antihistamines, nasal sprays, avoid allergens.",
        ),
        Rule::new(
            "Conjunctivitis (Pink Eye)",
            ["red eyes", "itchy eyes", "watery eyes", "eye discharge", "swelling"],
            "Warm compresses, eye drops. Bacterial cases need antibiotic drops.",
        ),
        Rule::new(
            "Sinusitis",
            ["nasal congestion", "sinus pressure", "headache", "runny nose", "cough", "fatigue"],
            "Nasal decongestants, saline rinses, rest. Antibiotics if bacterial.",
        ),
        // ENT, cardiovascular and metabolic
        Rule::new(
            "Tonsillitis",
            ["sore throat", "difficulty swallowing", "fever", "swollen lymph nodes", "headache"],
            "Rest, warm liquids, pain relievers. May need antibiotics if bacterial.",
        ),
        Rule::new(
            "Ear Infection (Otitis Media)",
            ["ear pain", "fever", "hearing loss", "headache", "irritability"],
            "Pain relievers, warm compresses. Antibiotics may be prescribed.",
        ),
        Rule::new(
            "Diabetes (Type 2)",
            ["frequent urination", "excessive thirst", "fatigue", "weight loss", "blurred vision"],
            "Diet management, regular exercise, blood sugar monitoring, medications.",
        ),
        Rule::new(
            "Anemia",
            ["fatigue", "weakness", "pale skin", "shortness of breath", "dizziness", "rapid heartbeat"],
            "Iron supplements, dietary changes, treat underlying cause.",
        ),
        Rule::new(
            "Hypertension",
            ["headache", "shortness of breath", "dizziness", "chest pain", "fatigue"],
            "Lifestyle changes, reduced salt intake, regular exercise, medications if prescribed.",
        ),
    ]
}
