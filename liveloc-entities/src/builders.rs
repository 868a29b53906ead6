pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::coordinate_builder::*;

pub mod coordinate_builder {

    use super::*;
    use crate::geo::*;

    #[derive(Debug)]
    pub struct CoordinateBuild {
        coords: Coordinate,
    }

    impl CoordinateBuild {
        pub fn lat(mut self, lat: Degrees) -> Self {
            self.coords.lat = lat;
            self
        }
        pub fn lng(mut self, lng: Degrees) -> Self {
            self.coords.lng = lng;
            self
        }
        pub fn accuracy(mut self, accuracy: Meters) -> Self {
            self.coords.accuracy = Some(accuracy);
            self
        }
        pub fn finish(self) -> Coordinate {
            self.coords
        }
    }

    impl Builder for Coordinate {
        type Build = CoordinateBuild;
        fn build() -> CoordinateBuild {
            CoordinateBuild {
                coords: Coordinate {
                    lat: 0.0,
                    lng: 0.0,
                    accuracy: None,
                },
            }
        }
    }
}
