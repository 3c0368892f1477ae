mod tests {
    use myrtio_g35::{BulbRange, RandomSource, XorShift16};

    #[test]
    fn test_bulb_range_addresses() {
        let range = BulbRange::new(3, 4);
        assert_eq!(range.addresses().collect::<Vec<_>>(), [3, 4, 5, 6]);
        assert_eq!(range.addresses().rev().collect::<Vec<_>>(), [6, 5, 4, 3]);
        assert!(BulbRange::new(9, 0).is_empty());
    }

    #[test]
    fn test_bulb_range_contains() {
        let whole = BulbRange::whole(50);
        assert!(whole.contains(0));
        assert!(whole.contains(49));
        assert!(!whole.contains(50));

        let tail = BulbRange::new(250, 10);
        assert!(tail.contains(255));
        assert!(!tail.contains(249));
    }

    #[test]
    fn test_closure_random_source() {
        let mut next = 0u16;
        let mut counter = move || {
            next += 1;
            next
        };
        assert_eq!(counter.next_u16(), 1);
        assert_eq!(counter.next_u16(), 2);
    }

    #[test]
    fn test_xorshift_is_seeded() {
        let mut a = XorShift16::new(1234);
        let mut b = XorShift16::new(1234);
        let first: Vec<u16> = (0..8).map(|_| a.next_u16()).collect();
        let second: Vec<u16> = (0..8).map(|_| b.next_u16()).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|value| *value != 0));

        let mut zero = XorShift16::new(0);
        assert_ne!(zero.next_u16(), 0);
    }
}
