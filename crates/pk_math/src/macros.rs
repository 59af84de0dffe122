// Component-wise operators shared by Vector2, Vector3 and Vector4.

macro_rules! impl_vector_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl $name {
            /// Create a vector with every component set to `value`.
            #[inline]
            pub const fn splat(value: f64) -> Self {
                Self { $($field: value),+ }
            }

            /// Dot product.
            #[inline]
            pub fn dot(self, rhs: Self) -> f64 {
                let mut sum = 0.0;
                $(sum += self.$field * rhs.$field;)+
                sum
            }

            /// Squared euclidean length.
            #[inline]
            pub fn length_squared(self) -> f64 {
                self.dot(self)
            }

            /// Euclidean length.
            #[inline]
            pub fn length(self) -> f64 {
                self.length_squared().sqrt()
            }

            /// Divide by length.
            ///
            /// A zero-length vector yields non-finite components; there is no guard.
            #[inline]
            pub fn normalize(self) -> Self {
                self / self.length()
            }

            /// Component-wise `min(max(self, lo), hi)`.
            #[inline]
            pub fn clamp(self, lo: Self, hi: Self) -> Self {
                Self { $($field: self.$field.max(lo.$field).min(hi.$field)),+ }
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, rhs: Self) -> Self {
                Self { $($field: self.$field.min(rhs.$field)),+ }
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, rhs: Self) -> Self {
                Self { $($field: self.$field.max(rhs.$field)),+ }
            }

            /// True if every component is finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$field.is_finite())+
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl std::ops::Mul<f64> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, t: f64) -> Self {
                Self { $($field: self.$field * t),+ }
            }
        }

        impl std::ops::Mul<$name> for f64 {
            type Output = $name;
            #[inline]
            fn mul(self, v: $name) -> $name {
                v * self
            }
        }

        /// Component-wise (Hadamard) product.
        impl std::ops::Mul for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl std::ops::Div<f64> for $name {
            type Output = Self;
            #[inline]
            fn div(self, t: f64) -> Self {
                Self { $($field: self.$field / t),+ }
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl std::ops::MulAssign<f64> for $name {
            #[inline]
            fn mul_assign(&mut self, t: f64) {
                $(self.$field *= t;)+
            }
        }

        impl std::ops::MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$field *= rhs.$field;)+
            }
        }

        impl std::ops::DivAssign<f64> for $name {
            #[inline]
            fn div_assign(&mut self, t: f64) {
                $(self.$field /= t;)+
            }
        }
    };
}
