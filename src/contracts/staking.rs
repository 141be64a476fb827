//! Staking rewards contract bindings (Synthetix-style)

use alloy::sol;

sol! {
    /// Staking rewards interface for vault shares
    #[sol(rpc)]
    interface IStakingRewards {
        /// Returns the staked token (the vault share token)
        function stakingToken() external view returns (address);

        /// Returns the rewards token
        function rewardsToken() external view returns (address);

        /// Returns total staked amount
        function totalSupply() external view returns (uint256);

        /// Returns staked balance of account
        function balanceOf(address account) external view returns (uint256);

        /// Returns rewards accrued and not yet claimed by account
        function earned(address account) external view returns (uint256);

        /// Stake vault shares
        function stake(uint256 amount) external;

        /// Unstake vault shares
        function withdraw(uint256 amount) external;

        /// Claim accrued rewards
        function getReward() external;

        /// Unstake everything and claim in one call
        function exit() external;

        // Events

        /// Emitted on stake
        event Staked(address indexed user, uint256 amount);

        /// Emitted on unstake
        event Withdrawn(address indexed user, uint256 amount);

        /// Emitted on reward claim
        event RewardPaid(address indexed user, uint256 reward);
    }
}
