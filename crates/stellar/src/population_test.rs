use crate::population::StellarPopulation;

#[test]
fn all_is_in_ascending_order() {
    let mut sorted = StellarPopulation::ALL;
    sorted.sort();
    assert_eq!(sorted, StellarPopulation::ALL);
    assert!(StellarPopulation::YoungI < StellarPopulation::HaloII);
}

#[test]
fn cluster_age_boundaries() {
    assert_eq!(StellarPopulation::from_cluster_age(0.0), StellarPopulation::YoungI);
    assert_eq!(StellarPopulation::from_cluster_age(1.999), StellarPopulation::YoungI);
    assert_eq!(StellarPopulation::from_cluster_age(2.0), StellarPopulation::IntermediateI);
    assert_eq!(StellarPopulation::from_cluster_age(4.999), StellarPopulation::IntermediateI);
    assert_eq!(StellarPopulation::from_cluster_age(5.0), StellarPopulation::OldI);
    assert_eq!(StellarPopulation::from_cluster_age(8.0), StellarPopulation::OldI);
}

#[test]
fn display_uses_full_name() {
    assert_eq!(StellarPopulation::DiskII.to_string(), "Disk Population II");
}
