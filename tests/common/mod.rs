#![allow(dead_code)]

use medscan::catalog::MedicineRecord;

pub fn paracetamol() -> MedicineRecord {
    MedicineRecord::new(
        "1",
        "Paracetamol",
        "Acetaminophen",
        "500mg",
        "ABC Pharmaceuticals",
    )
}

pub fn amoxicillin() -> MedicineRecord {
    MedicineRecord::new("2", "Amoxicillin", "Amoxicillin", "250mg", "GSK")
}

pub fn ibuprofen() -> MedicineRecord {
    MedicineRecord::new("3", "Brufen", "Ibuprofen", "400mg", "Abbott")
}

pub fn sample_catalog() -> Vec<MedicineRecord> {
    vec![paracetamol(), amoxicillin(), ibuprofen()]
}
