//! Seed rows for the persisted disease and symptom catalogs.

/// `(name, description, precautions)` for every disease known at first start.
pub const DISEASES: &[(&str, &str, &str)] = &[
    (
        "Flu (Influenza)",
        "Influenza is a viral infection that attacks your respiratory system.",
        "Rest, drink fluids, take antiviral medications if prescribed. Avoid contact with others.",
    ),
    (
        "Common Cold",
        "A viral infectious disease of the upper respiratory tract.",
        "Rest, stay hydrated, use over-the-counter cold medications. Usually resolves in 7-10 days.",
    ),
    (
        "COVID-19",
        "Coronavirus disease caused by SARS-CoV-2 virus.",
        "Isolate immediately, wear a mask, consult healthcare provider. Monitor oxygen levels.",
    ),
    (
        "Pneumonia",
        "Infection that inflames air sacs in one or both lungs.",
        "Seek medical attention immediately. May require antibiotics or hospitalization.",
    ),
    (
        "Bronchitis",
        "Inflammation of the lining of bronchial tubes.",
        "Rest, drink fluids, use humidifier. Avoid smoking and air pollutants.",
    ),
    (
        "Asthma",
        "Chronic condition affecting airways in the lungs.",
        "Use prescribed inhalers, avoid triggers, have an action plan ready.",
    ),
    (
        "Tuberculosis",
        "Bacterial infection primarily affecting the lungs.",
        "Requires long-term antibiotic treatment. Highly contagious - isolate and seek medical care.",
    ),
    (
        "Migraine",
        "A neurological condition causing severe headaches.",
        "Rest in a dark, quiet room. Take prescribed medications. Stay hydrated.",
    ),
    (
        "Tension Headache",
        "Most common type of headache, feels like a band around the head.",
        "Over-the-counter pain relievers, stress management, adequate sleep.",
    ),
    (
        "Vertigo",
        "Sensation of spinning or dizziness.",
        "Sit or lie down immediately. Avoid sudden movements. See ENT specialist.",
    ),
    (
        "Gastroenteritis",
        "Inflammation of the stomach and intestines.",
        "Stay hydrated, eat bland foods, rest. Seek care if symptoms persist over 48 hours.",
    ),
    (
        "Food Poisoning",
        "Illness caused by eating contaminated food.",
        "Stay hydrated, rest. Seek medical care if severe vomiting or bloody stools.",
    ),
    (
        "Acid Reflux (GERD)",
        "Chronic digestive disease where stomach acid flows back.",
        "Avoid trigger foods, eat smaller meals, don't lie down after eating.",
    ),
    (
        "Irritable Bowel Syndrome",
        "Chronic condition affecting the large intestine.",
        "Dietary changes, stress management, fiber supplements may help.",
    ),
    (
        "Malaria",
        "Mosquito-borne disease caused by parasites.",
        "Seek immediate medical treatment. Antimalarial drugs required. Prevention is key.",
    ),
    (
        "Dengue Fever",
        "Mosquito-borne viral infection.",
        "No specific treatment. Rest, hydrate, take pain relievers (avoid aspirin).",
    ),
    (
        "Typhoid",
        "Bacterial infection spread through contaminated food/water.",
        "Antibiotics required. Hospitalization may be necessary for severe cases.",
    ),
    (
        "Chickenpox",
        "Highly contagious viral infection causing itchy rash.",
        "Calamine lotion for itching, antihistamines, stay hydrated. Isolate from others.",
    ),
    (
        "Eczema",
        "Condition that makes skin red, inflamed, and itchy.",
        "Moisturize regularly, avoid triggers, use prescribed creams.",
    ),
    (
        "Psoriasis",
        "Autoimmune condition causing rapid skin cell buildup.",
        "Topical treatments, light therapy, medications as prescribed.",
    ),
    (
        "Urticaria (Hives)",
        "Skin reaction causing itchy welts.",
        "Antihistamines, avoid known triggers, cool compresses.",
    ),
    (
        "Hypertension",
        "High blood pressure condition.",
        "Lifestyle changes, reduced salt intake, regular exercise, medications if prescribed.",
    ),
    (
        "Anemia",
        "Condition where blood lacks enough healthy red blood cells.",
        "Iron supplements, dietary changes, treat underlying cause.",
    ),
    (
        "Diabetes (Type 2)",
        "Chronic condition affecting blood sugar regulation.",
        "Diet management, regular exercise, blood sugar monitoring, medications.",
    ),
    (
        "Allergic Rhinitis",
        "Allergic response causing sneezing, itchy eyes, runny nose.",
        "Antihistamines, nasal sprays, avoid allergens.",
    ),
    (
        "Conjunctivitis (Pink Eye)",
        "Inflammation of the eye's outer membrane.",
        "Warm compresses, eye drops. Bacterial cases need antibiotic drops.",
    ),
    (
        "Sinusitis",
        "Inflammation of the sinuses.",
        "Nasal decongestants, saline rinses, rest. Antibiotics if bacterial.",
    ),
    (
        "Tonsillitis",
        "Inflammation of the tonsils.",
        "Rest, warm liquids, pain relievers. May need antibiotics if bacterial.",
    ),
    (
        "Ear Infection (Otitis Media)",
        "Infection of the middle ear.",
        "Pain relievers, warm compresses. Antibiotics may be prescribed.",
    ),
];

/// Canonical symptom names offered to clients before any catalog growth.
pub const SYMPTOMS: &[&str] = &[
    // General
    "fever",
    "high fever",
    "mild fever",
    "chills",
    "fatigue",
    "weakness",
    "body aches",
    "muscle pain",
    "joint pain",
    "sweating",
    "night sweats",
    "weight loss",
    "loss of appetite",
    // Respiratory
    "cough",
    "dry cough",
    "productive cough",
    "sore throat",
    "runny nose",
    "nasal congestion",
    "sneezing",
    "shortness of breath",
    "breathing difficulty",
    "wheezing",
    "chest pain",
    "chest tightness",
    // Head and neurological
    "headache",
    "severe headache",
    "throbbing headache",
    "dizziness",
    "lightheadedness",
    "vertigo",
    "confusion",
    "sensitivity to light",
    "sensitivity to sound",
    // Gastrointestinal
    "nausea",
    "vomiting",
    "diarrhea",
    "constipation",
    "abdominal pain",
    "stomach cramps",
    "bloating",
    "heartburn",
    "loss of taste",
    "loss of smell",
    // Skin
    "rash",
    "itchy skin",
    "red spots",
    "blisters",
    "skin peeling",
    "hives",
    "swelling",
    // Eye and ear
    "red eyes",
    "watery eyes",
    "itchy eyes",
    "eye discharge",
    "ear pain",
    "hearing loss",
    "ringing in ears",
    // Other
    "swollen lymph nodes",
    "sinus pressure",
    "difficulty swallowing",
    "frequent urination",
    "excessive thirst",
    "rapid heartbeat",
    "pale skin",
];
